// src/crawl/queue.rs
// =============================================================================
// This module implements link extraction and breadth-first crawling.
//
// How a recursive crawl works:
// 1. Start with the seed URL in a queue at depth 0
// 2. Pop the front item; skip it if already visited or too deep
// 3. Fetch the page and extract its filtered links
// 4. Add the links to the result, and queue them one level deeper
// 5. Repeat until the queue is empty or the page budget is spent
//
// Visited checks happen when an item is popped, not when it is pushed. The
// same URL can sit in the queue several times; it is fetched only once.
//
// Politeness:
// - A fixed delay separates consecutive fetches
// - Fetches run one at a time
// =============================================================================

use std::collections::{HashSet, VecDeque};
use tracing::{debug, error, info};

use super::config::CrawlConfig;
use super::filter::LinkFilter;
use crate::extract::{extract_hrefs, normalize_link, FetchError, FetchedPage, Fetcher};

/// The set of normalized links found by one crawl.
pub type LinkSet = HashSet<String>;

// A page waiting in the crawl queue
#[derive(Debug, Clone)]
struct CrawlTask {
    url: String,
    depth: usize, // link hops from the seed (seed = 0)
}

/// What one crawl produced.
#[derive(Debug, Clone, Default)]
pub struct CrawlOutput {
    pub links: LinkSet,
    /// Number of fetch operations performed
    pub pages_fetched: usize,
    /// Pages whose fetch failed (they contributed no links)
    pub failed_pages: Vec<String>,
}

pub struct Crawler<F> {
    fetcher: F,
    config: CrawlConfig,
}

impl<F: Fetcher> Crawler<F> {
    pub fn new(fetcher: F, config: CrawlConfig) -> Self {
        Self { fetcher, config }
    }

    // Extracts links from `seed_url`, crawling further when the config asks
    // for it. Never fails: broken pages are logged and skipped.
    pub async fn crawl(&self, seed_url: &str) -> CrawlOutput {
        let filter = LinkFilter::new(&self.config.filter, seed_url);

        if self.config.is_single_page() {
            self.crawl_single(seed_url, &filter).await
        } else {
            self.crawl_recursive(seed_url, &filter).await
        }
    }

    async fn crawl_single(&self, url: &str, filter: &LinkFilter<'_>) -> CrawlOutput {
        let mut output = CrawlOutput {
            pages_fetched: 1,
            ..CrawlOutput::default()
        };

        info!("Visiting: {}", url);
        match self.extract_page(url, filter).await {
            Ok(links) => output.links = links,
            Err(e) => {
                error!("Failed to extract links from {}: {}", url, e);
                output.failed_pages.push(url.to_string());
            }
        }

        info!("Extracted {} links", output.links.len());
        output
    }

    async fn crawl_recursive(&self, seed_url: &str, filter: &LinkFilter<'_>) -> CrawlOutput {
        let max_depth = self.config.max_depth;
        let max_pages = self.config.max_pages;

        let mut output = CrawlOutput::default();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(CrawlTask {
            url: seed_url.to_string(),
            depth: 0,
        });

        while output.pages_fetched < max_pages {
            let Some(task) = queue.pop_front() else {
                break;
            };

            if visited.contains(&task.url) || task.depth >= max_depth {
                continue;
            }

            // Polite crawling: wait between fetches, not before the first
            if output.pages_fetched > 0 && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }

            visited.insert(task.url.clone());
            output.pages_fetched += 1;

            info!(
                "Crawling page {} (depth {}): {}",
                output.pages_fetched, task.depth, task.url
            );

            let page_links = match self.extract_page(&task.url, filter).await {
                Ok(links) => links,
                Err(e) => {
                    error!("Failed to extract links from {}: {}", task.url, e);
                    output.failed_pages.push(task.url);
                    continue;
                }
            };

            if task.depth + 1 < max_depth {
                for link in &page_links {
                    if !visited.contains(link) {
                        queue.push_back(CrawlTask {
                            url: link.clone(),
                            depth: task.depth + 1,
                        });
                    }
                }
            }

            output.links.extend(page_links);
        }

        info!(
            "Recursive crawling completed, visited {} pages, extracted {} links",
            output.pages_fetched,
            output.links.len()
        );

        output
    }

    // Fetches one page and returns its links that pass the filter
    async fn extract_page(&self, url: &str, filter: &LinkFilter<'_>) -> Result<LinkSet, FetchError> {
        let page = self.fetcher.fetch(url).await?;
        debug!("Fetched {} (HTTP {}, final URL {})", url, page.status, page.final_url);
        Ok(collect_links(&page, filter))
    }
}

// Turns a fetched page into its set of normalized, filtered links.
// Relative targets resolve against the final URL.
fn collect_links(page: &FetchedPage, filter: &LinkFilter<'_>) -> LinkSet {
    let mut links = LinkSet::new();

    for href in extract_hrefs(&page.body) {
        let Some(url) = normalize_link(&page.final_url, &href) else {
            continue;
        };

        match filter.check(&url) {
            None => {
                links.insert(url.into());
            }
            Some(reason) => debug!("Filtered {} ({})", url, reason),
        }
    }

    links
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is the crawler generic over F: Fetcher?
//    - Production code plugs in HttpFetcher (reqwest)
//    - Tests plug in FakeFetcher, which serves pages from a HashMap
//    - No network needed to test the traversal logic
//
// 2. let-else
//    - let Some(x) = expr else { break; };
//    - Binds x or runs the else block, which must leave the scope
//
// 3. Why does the budget count failed pages?
//    - max_pages limits fetch operations; a failed fetch is still a fetch
// -----------------------------------------------------------------------------

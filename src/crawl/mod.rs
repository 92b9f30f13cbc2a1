// src/crawl/mod.rs
// =============================================================================
// This module handles link extraction across one or more pages.
//
// Features:
// - Single-page extraction or breadth-first crawling
// - Depth and page budgets
// - Link filters (external hosts, file extensions, keywords, .html pages)
// - Polite crawling with a delay between requests
// =============================================================================

mod config;
mod filter;
mod queue;

pub use config::{CrawlConfig, DEFAULT_DELAY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES};
pub use queue::{CrawlOutput, Crawler, LinkSet};

// src/report/stats.rs
// =============================================================================
// Summary statistics over a set of extracted links: how many per domain,
// per protocol and per file type.
// =============================================================================

use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

use crate::crawl::LinkSet;

// Longest suffix we still treat as a file extension
const MAX_EXTENSION_LEN: usize = 5;

// How many domains / file types to print
const TOP_N: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkStats {
    pub total_links: usize,
    /// host[:port] -> count
    pub domain_distribution: BTreeMap<String, usize>,
    /// scheme -> count
    pub protocol_distribution: BTreeMap<String, usize>,
    /// extension without the dot -> count
    pub file_types: BTreeMap<String, usize>,
}

impl LinkStats {
    pub fn from_links(links: &LinkSet) -> Self {
        let mut stats = LinkStats {
            total_links: links.len(),
            ..LinkStats::default()
        };

        for link in links {
            let Ok(url) = Url::parse(link) else {
                continue;
            };

            let domain = match (url.host_str(), url.port()) {
                (Some(host), Some(port)) => format!("{}:{}", host, port),
                (Some(host), None) => host.to_string(),
                (None, _) => String::new(),
            };
            *stats.domain_distribution.entry(domain).or_default() += 1;

            *stats
                .protocol_distribution
                .entry(url.scheme().to_string())
                .or_default() += 1;

            if let Some(ext) = file_type(url.path()) {
                *stats.file_types.entry(ext).or_default() += 1;
            }
        }

        stats
    }

    pub fn is_empty(&self) -> bool {
        self.total_links == 0
    }

    fn percent(&self, count: usize) -> f64 {
        count as f64 / self.total_links as f64 * 100.0
    }

    pub fn print(&self) {
        if self.is_empty() {
            println!("No statistics");
            return;
        }

        println!("\n=== Link statistics ===");
        println!("Total links: {}", self.total_links);

        println!("\nDomain distribution:");
        for (domain, count) in top_n(&self.domain_distribution, TOP_N) {
            println!("  {}: {} ({:.1}%)", domain, count, self.percent(count));
        }

        if !self.protocol_distribution.is_empty() {
            println!("\nProtocol distribution:");
            for (protocol, count) in &self.protocol_distribution {
                println!("  {}: {} ({:.1}%)", protocol, count, self.percent(*count));
            }
        }

        if !self.file_types.is_empty() {
            println!("\nFile type distribution (top {}):", TOP_N);
            for (file_type, count) in top_n(&self.file_types, TOP_N) {
                println!("  .{}: {} ({:.1}%)", file_type, count, self.percent(count));
            }
        }
    }
}

// Text after the last '.' of the lowercased path, if short enough
//
//   "/files/Report.PDF" -> Some("pdf")
//   "/v1.2/docs"        -> None ("2/docs" is too long)
//   "/about"            -> None
fn file_type(path: &str) -> Option<String> {
    let path = path.to_lowercase();
    let (_, ext) = path.rsplit_once('.')?;
    if ext.len() <= MAX_EXTENSION_LEN {
        Some(ext.to_string())
    } else {
        None
    }
}

// Highest counts first; ties broken by key so output is stable
fn top_n(counts: &BTreeMap<String, usize>, n: usize) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(key, count)| (key.as_str(), *count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries.truncate(n);
    entries
}

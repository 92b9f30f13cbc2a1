// src/crawl/filter.rs
// =============================================================================
// Decides whether a normalized link belongs in the result.
//
// Filters run in a fixed order and the first one that matches wins:
// 1. external   - host differs from the seed's host (when externals are off)
// 2. extension  - path ends with an excluded extension
// 3. keyword    - URL contains an excluded keyword
// 4. html page  - path ends in ".html" (always on)
// =============================================================================

use std::fmt;
use url::Url;

use super::config::FilterConfig;

// Why a link was dropped (used for debug logging and tests)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    External,
    Extension(String),
    Keyword(String),
    HtmlPage,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::External => write!(f, "external host"),
            Rejection::Extension(ext) => write!(f, "extension {}", ext),
            Rejection::Keyword(kw) => write!(f, "keyword '{}'", kw),
            Rejection::HtmlPage => write!(f, ".html page"),
        }
    }
}

// A FilterConfig bound to the host of one crawl's seed URL
#[derive(Debug, Clone)]
pub struct LinkFilter<'a> {
    config: &'a FilterConfig,
    seed_host: Option<String>,
}

impl<'a> LinkFilter<'a> {
    pub fn new(config: &'a FilterConfig, seed_url: &str) -> Self {
        let seed_host = Url::parse(seed_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string));

        Self { config, seed_host }
    }

    // Returns None when the link passes every filter
    pub fn check(&self, url: &Url) -> Option<Rejection> {
        if !self.config.include_external && url.host_str() != self.seed_host.as_deref() {
            return Some(Rejection::External);
        }

        let path = url.path().to_lowercase();
        if let Some(ext) = self
            .config
            .excluded_extensions
            .iter()
            .find(|ext| path.ends_with(ext.as_str()))
        {
            return Some(Rejection::Extension(ext.clone()));
        }

        let full = url.as_str().to_lowercase();
        if let Some(kw) = self
            .config
            .excluded_keywords
            .iter()
            .find(|kw| full.contains(kw.as_str()))
        {
            return Some(Rejection::Keyword(kw.clone()));
        }

        if path.ends_with(".html") {
            return Some(Rejection::HtmlPage);
        }

        None
    }
}

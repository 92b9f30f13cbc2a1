// src/crawl/config.rs
// =============================================================================
// Immutable configuration for one crawl.
//
// Options are collected with a builder and checked once in build(). After
// that the crawler only reads them.
// =============================================================================

use std::time::Duration;
use thiserror::Error;

/// Keywords that always exclude a link, on top of any the caller adds.
pub const BUILTIN_EXCLUDED_KEYWORDS: &[&str] = &["git", "lab", "twitter", "me"];

/// Pause between two page fetches in recursive mode.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_MAX_PAGES: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max pages must be at least 1")]
    ZeroMaxPages,

    #[error("invalid file extension '{0}'")]
    InvalidExtension(String),
}

/// Which links make it into the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterConfig {
    pub include_external: bool,
    /// Lowercased, always starting with '.'
    pub excluded_extensions: Vec<String>,
    /// Lowercased; the built-in keywords are merged in
    pub excluded_keywords: Vec<String>,
}

/// Everything one crawl needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub filter: FilterConfig,
    /// 0 means "the seed page only, no crawling"
    pub max_depth: usize,
    pub max_pages: usize,
    pub delay: Duration,
}

impl CrawlConfig {
    pub fn builder() -> CrawlConfigBuilder {
        CrawlConfigBuilder::default()
    }

    pub fn is_single_page(&self) -> bool {
        self.max_depth == 0
    }
}

#[derive(Debug, Clone)]
pub struct CrawlConfigBuilder {
    include_external: bool,
    extensions: Vec<String>,
    keywords: Vec<String>,
    max_depth: usize,
    max_pages: usize,
    delay: Duration,
}

impl Default for CrawlConfigBuilder {
    fn default() -> Self {
        Self {
            include_external: true,
            extensions: Vec::new(),
            keywords: Vec::new(),
            max_depth: 0,
            max_pages: DEFAULT_MAX_PAGES,
            delay: DEFAULT_DELAY,
        }
    }
}

impl CrawlConfigBuilder {
    pub fn include_external(mut self, include: bool) -> Self {
        self.include_external = include;
        self
    }

    pub fn exclude_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    pub fn exclude_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Crawl recursively down to `max_depth` link hops (seed is depth 0).
    pub fn recursive(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn build(self) -> Result<CrawlConfig, ConfigError> {
        if self.max_pages == 0 {
            return Err(ConfigError::ZeroMaxPages);
        }

        let mut excluded_extensions = Vec::new();
        for ext in &self.extensions {
            let ext = normalize_extension(ext)?;
            if !excluded_extensions.contains(&ext) {
                excluded_extensions.push(ext);
            }
        }

        let mut excluded_keywords: Vec<String> = BUILTIN_EXCLUDED_KEYWORDS
            .iter()
            .map(|kw| kw.to_string())
            .collect();
        for kw in &self.keywords {
            let kw = kw.trim().to_lowercase();
            if !kw.is_empty() && !excluded_keywords.contains(&kw) {
                excluded_keywords.push(kw);
            }
        }

        Ok(CrawlConfig {
            filter: FilterConfig {
                include_external: self.include_external,
                excluded_extensions,
                excluded_keywords,
            },
            max_depth: self.max_depth,
            max_pages: self.max_pages,
            delay: self.delay,
        })
    }
}

// "PDF", ".pdf" and " pdf " all become ".pdf"
fn normalize_extension(raw: &str) -> Result<String, ConfigError> {
    let ext = raw.trim().trim_start_matches('.').to_lowercase();
    if ext.is_empty() || ext.contains('/') {
        return Err(ConfigError::InvalidExtension(raw.to_string()));
    }
    Ok(format!(".{}", ext))
}

// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the struct fields below become flags and
// positional arguments, and their doc comments become the --help text.
// =============================================================================

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::crawl::{DEFAULT_DELAY, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES};

#[derive(Parser, Debug)]
#[command(
    name = "link-extractor",
    version,
    about = "Extract all links from web pages",
    long_about = "link-extractor fetches a web page, collects every link on it, drops the ones \
                  you are not interested in, and saves the rest to a text file. With --recursive \
                  it follows the links it finds, breadth-first, within a depth and page budget."
)]
pub struct Cli {
    /// URL of the web page to extract links from
    pub url: String,

    /// Output filename (default: extracted_links_<timestamp>.txt)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude links to hosts other than the one in URL
    #[arg(long)]
    pub no_external: bool,

    /// Filter out file extensions (e.g. pdf jpg png)
    #[arg(long, num_args = 1.., value_name = "EXT")]
    pub filter_ext: Vec<String>,

    /// Filter out URLs containing keywords (git, lab and twitter are always filtered)
    #[arg(long, num_args = 1.., value_name = "KW")]
    pub filter_keywords: Vec<String>,

    /// Recursively crawl found links
    #[arg(long)]
    pub recursive: bool,

    /// Maximum depth for recursive crawling
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of pages to crawl
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: usize,

    /// Delay between page fetches when crawling, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    pub delay_ms: u64,

    /// Show the first N links
    #[arg(long, value_name = "N")]
    pub show_links: Option<usize>,

    /// Don't save to file
    #[arg(long)]
    pub no_save: bool,

    /// Save links in discovery order instead of sorted
    #[arg(long)]
    pub no_sort: bool,

    /// Show statistics
    #[arg(long)]
    pub show_stats: bool,

    /// Print links and statistics as JSON
    #[arg(long)]
    pub json: bool,

    /// Logging level (RUST_LOG overrides it when set)
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    #[value(alias = "warn")]
    Warning,
    Error,
}

impl LogLevel {
    // Directive for tracing_subscriber::EnvFilter
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["link-extractor", "https://example.com"]).unwrap();
        assert_eq!(cli.url, "https://example.com");
        assert!(!cli.recursive);
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.max_pages, 100);
        assert_eq!(cli.delay_ms, 500);
        assert_eq!(cli.log_level, LogLevel::Info);
        assert!(cli.filter_ext.is_empty());
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_multi_value_flags() {
        let cli = Cli::try_parse_from([
            "link-extractor",
            "https://example.com",
            "--filter-ext",
            "pdf",
            "jpg",
            "--filter-keywords",
            "login",
            "-o",
            "out.txt",
            "--recursive",
            "--max-depth",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.filter_ext, vec!["pdf", "jpg"]);
        assert_eq!(cli.filter_keywords, vec!["login"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert!(cli.recursive);
        assert_eq!(cli.max_depth, 3);
    }

    #[test]
    fn test_log_level_is_case_insensitive() {
        let cli = Cli::try_parse_from(["link-extractor", "https://example.com", "--log-level", "WARNING"])
            .unwrap();
        assert_eq!(cli.log_level, LogLevel::Warning);
        assert_eq!(cli.log_level.as_filter(), "warn");
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["link-extractor"]).is_err());
    }
}

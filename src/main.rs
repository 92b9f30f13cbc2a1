// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging at the requested level
// 3. Run the crawl, racing it against Ctrl-C
// 4. Show / save the links that were found
// 5. Exit with a code (0 = done, 2 = error, 130 = interrupted)
// =============================================================================

mod cli;
mod crawl;
mod extract;
mod report;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, LogLevel};
use crawl::{CrawlConfig, CrawlOutput, Crawler};
use extract::HttpFetcher;
use report::LinkStats;

// Conventional exit code for SIGINT (128 + 2)
const EXIT_INTERRUPTED: i32 = 130;
const EXIT_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    // Nothing is saved until the crawl finishes, so an interrupt simply
    // drops whatever was collected so far.
    let exit_code = tokio::select! {
        result = run(cli) => match result {
            Ok(code) => code,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                EXIT_ERROR
            }
        },
        Ok(()) = tokio::signal::ctrl_c() => {
            eprintln!("\nOperation interrupted by user");
            EXIT_INTERRUPTED
        }
    };

    std::process::exit(exit_code);
}

// RUST_LOG wins when set; otherwise --log-level applies to this crate and
// everything else stays at warn.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("warn,link_extractor={}", level.as_filter()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<i32> {
    let config = build_config(&cli)?;

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;
    let crawler = Crawler::new(fetcher, config);

    let output = crawler.crawl(&cli.url).await;

    if output.links.is_empty() {
        println!("No links found");
        return Ok(0);
    }

    if cli.json {
        print_json(&cli.url, &output)?;
    } else {
        if let Some(limit) = cli.show_links {
            report::print_links(&output.links, Some(limit));
        }
        if cli.show_stats {
            LinkStats::from_links(&output.links).print();
        }
    }

    if !cli.no_save {
        report::save_links(&output.links, cli.output.as_deref(), !cli.no_sort)?;
    }

    Ok(0)
}

// Turns the CLI flags into a validated crawl configuration
//
// Bad input is reported here, before any network I/O happens.
fn build_config(cli: &Cli) -> Result<CrawlConfig> {
    let mut builder = CrawlConfig::builder()
        .include_external(!cli.no_external)
        .exclude_extensions(cli.filter_ext.iter().cloned())
        .exclude_keywords(cli.filter_keywords.iter().cloned())
        .max_pages(cli.max_pages)
        .delay(Duration::from_millis(cli.delay_ms));

    if cli.recursive {
        if cli.max_depth == 0 {
            bail!("--max-depth must be at least 1 when crawling recursively");
        }
        builder = builder.recursive(cli.max_depth);
    }

    Ok(builder.build()?)
}

#[derive(Serialize)]
struct JsonReport<'a> {
    seed_url: &'a str,
    pages_fetched: usize,
    failed_pages: &'a [String],
    links: Vec<&'a str>,
    stats: LinkStats,
}

fn print_json(seed_url: &str, output: &CrawlOutput) -> Result<()> {
    let report = JsonReport {
        seed_url,
        pages_fetched: output.pages_fetched,
        failed_pages: &output.failed_pages,
        links: report::sorted_links(&output.links),
        stats: LinkStats::from_links(&output.links),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["link-extractor", "https://example.com"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_without_recursive_is_single_page() {
        let config = build_config(&parse(&["--max-depth", "5"])).unwrap();
        assert!(config.is_single_page());
    }

    #[test]
    fn test_recursive_uses_max_depth() {
        let config = build_config(&parse(&["--recursive", "--max-depth", "3", "--max-pages", "7"])).unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_pages, 7);
        assert_eq!(config.delay, Duration::from_millis(500));
    }

    #[test]
    fn test_flags_reach_the_filter() {
        let config = build_config(&parse(&["--no-external", "--filter-ext", "PDF", "--filter-keywords", "Shop"])).unwrap();
        assert!(!config.filter.include_external);
        assert_eq!(config.filter.excluded_extensions, vec![".pdf"]);
        assert!(config.filter.excluded_keywords.contains(&"shop".to_string()));
    }

    #[test]
    fn test_invalid_budgets_are_rejected() {
        assert!(build_config(&parse(&["--recursive", "--max-depth", "0"])).is_err());
        assert!(build_config(&parse(&["--recursive", "--max-pages", "0"])).is_err());
    }
}

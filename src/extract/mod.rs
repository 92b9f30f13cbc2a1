// src/extract/mod.rs
// =============================================================================
// This module gets links off a single page.
//
// Submodules:
// - fetch: Downloads a page over HTTP (behind the Fetcher trait)
// - html: Parses HTML and normalizes link targets
// =============================================================================

mod fetch;
mod html;

pub use fetch::{FetchError, FetchedPage, Fetcher, HttpFetcher};
pub use html::{extract_hrefs, normalize_link};

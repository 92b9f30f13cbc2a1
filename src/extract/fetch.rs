// src/extract/fetch.rs
// =============================================================================
// This module fetches web pages over HTTP.
//
// Key functionality:
// - Sends a GET request with a browser-like User-Agent
// - Follows redirects and reports the final URL (relative links on the page
//   must be resolved against it, not against the URL we asked for)
// - Treats any non-2xx status as a failure
//
// The crawler only talks to the `Fetcher` trait, so tests can feed it pages
// from memory instead of the network.
//
// Rust concepts:
// - Traits: The seam between the crawler and the network
// - thiserror: Typed errors with readable messages
// - async/await: Non-blocking network I/O
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// User-Agent sent with every request. Some sites refuse obvious bots.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL after following redirects
    pub final_url: Url,
    /// HTTP status code (always 2xx for a fetched page)
    pub status: u16,
    /// Decoded response body
    pub body: String,
}

// Everything that can go wrong while fetching one page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

// Anything that can turn a URL into a page
//
// Send + Sync lets a fetcher live inside a crawler that is moved across
// tokio tasks.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

// The real fetcher, backed by a reqwest client
//
// The client is built once and reused for every page (connection pooling).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        // Parse up front so a malformed seed gives a clear message
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Grab the final URL before .text() consumes the response
        let final_url = response.url().clone();

        // reqwest decodes using the charset from Content-Type (UTF-8 fallback)
        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        Ok(FetchedPage {
            final_url,
            status: status.as_u16(),
            body,
        })
    }
}

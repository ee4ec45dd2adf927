use std::fmt;

use async_trait::async_trait;

use super::types::PeoplePage;

/// Errors that can occur while retrieving the character listing.
///
/// Every variant aborts the whole fetch; the UI collapses them into a single
/// generic message and the details go to the log.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP client could not be built (bad TLS setup, invalid settings).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success status.
    Status { status: u16, message: String },
    /// Response body was not a valid page.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Status { status, message } => {
                write!(f, "HTTP {status}: {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

/// Anything that can hand back one page of the listing for a URL.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the name of the source (for logging).
    fn name(&self) -> &str;

    /// Fetches and decodes the page at `url`.
    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, FetchError>;
}

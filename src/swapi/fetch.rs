//! # Full-collection retrieval
//!
//! Follows the `next` link from the base URL until the listing is exhausted,
//! accumulating every page's `results` in order. The collection is returned
//! only once the last page has been consumed: a failure on any page discards
//! what was gathered so far.
//!
//! Pages are requested strictly one after another. There is no page bound;
//! the upstream service is trusted to terminate its `next` chain.

use log::{debug, info, warn};
use tokio::sync::mpsc::Sender;

use super::source::{FetchError, PageSource};
use super::types::{Character, FetchProgress};

/// Default upstream listing.
pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api/people/";

/// Fetches every character reachable from `base_url`.
///
/// When `progress` is given, a [`FetchProgress`] is sent after each page. A
/// closed progress channel is logged and otherwise ignored.
pub async fn fetch_all(
    source: &dyn PageSource,
    base_url: &str,
    progress: Option<&Sender<FetchProgress>>,
) -> Result<Vec<Character>, FetchError> {
    let mut characters = Vec::new();
    let mut pages = 0usize;
    let mut url = Some(base_url.to_string());

    info!("Fetching characters from {} via {}", base_url, source.name());

    while let Some(current) = url.take() {
        debug!("Requesting page {}: {}", pages + 1, current);
        let page = source.fetch_page(&current).await.inspect_err(|e| {
            warn!(
                "Fetch aborted on page {} ({}): {}; discarding {} characters",
                pages + 1,
                current,
                e,
                characters.len()
            );
        })?;

        pages += 1;
        url = page.next_url().map(str::to_string);
        let total = page.count;
        characters.extend(page.results);

        debug!(
            "Page {} done: {} characters so far (server count {})",
            pages,
            characters.len(),
            total
        );

        if let Some(tx) = progress {
            let report = FetchProgress {
                pages,
                loaded: characters.len(),
                total,
            };
            if tx.send(report).await.is_err() {
                debug!("Progress receiver dropped, continuing fetch");
            }
        }
    }

    info!("Fetched {} characters in {} pages", characters.len(), pages);
    Ok(characters)
}

//! reqwest-backed page source for the SWAPI `people` endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use super::source::{FetchError, PageSource};
use super::types::PeoplePage;

pub struct SwapiClient {
    client: reqwest::Client,
}

impl SwapiClient {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("roster/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for SwapiClient {
    fn name(&self) -> &str {
        "swapi"
    }

    async fn fetch_page(&self, url: &str) -> Result<PeoplePage, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Upstream error for {}: {} - {}", url, status.as_u16(), body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                message: body,
            });
        }

        // Read the body first so decode failures are reported as Parse, not Network
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        serde_json::from_str::<PeoplePage>(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

//! Configuration document fetched over HTTP
//!
//! A 404 means "no document" and is not an error; any other non-success
//! status or transport failure is reported as a configuration load error.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::error::{TrackerError, TrackerResult};
use crate::traits::ConfigSource;

/// Default request timeout for the configuration fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Config source backed by an HTTP(S) endpoint
#[derive(Debug, Clone)]
pub struct HttpConfigSource {
    url: Url,
    client: reqwest::Client,
}

impl HttpConfigSource {
    pub fn new(url: Url) -> Self {
        Self::with_timeout(url, DEFAULT_FETCH_TIMEOUT)
    }

    pub fn with_timeout(url: Url, timeout: Duration) -> Self {
        let client = match reqwest::Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                warn!("Could not build HTTP client with a {timeout:?} timeout, fetching without one: {e}");
                reqwest::Client::new()
            }
        };
        Self { url, client }
    }
}

#[async_trait]
impl ConfigSource for HttpConfigSource {
    async fn fetch(&self) -> TrackerResult<Option<String>> {
        debug!("Fetching configuration from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TrackerError::config_load(self.describe(), e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(TrackerError::config_load(self.describe(), format!("HTTP {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TrackerError::config_load(self.describe(), e))?;
        Ok(Some(body))
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

//! D&D 5e reference API client (dnd5eapi.co compatible).

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use charforge_domain::{slugify, ReferenceTarget};

use crate::infrastructure::ports::{FetchError, ReferenceFetcher};

/// Default base URL for the 2014 ruleset.
pub const DEFAULT_DND5E_API_BASE_URL: &str = "https://www.dnd5eapi.co/api/2014";

/// Default request timeout in seconds.
pub const DEFAULT_DND5E_API_TIMEOUT_SECS: u64 = 30;

/// Client for the 5e SRD reference API.
#[derive(Clone)]
pub struct Dnd5eApiClient {
    client: Client,
    base_url: String,
}

impl Dnd5eApiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_DND5E_API_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full lookup URL for a target category and a human-entered name.
    pub fn resource_url(&self, target: &ReferenceTarget<'_>, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            target.category().path(),
            slugify(name)
        )
    }
}

impl Default for Dnd5eApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_DND5E_API_BASE_URL)
    }
}

#[async_trait]
impl ReferenceFetcher for Dnd5eApiClient {
    async fn fetch(&self, mut target: ReferenceTarget<'_>, name: &str) -> Result<(), FetchError> {
        let url = self.resource_url(&target, name);
        tracing::debug!(kind = %target.kind(), name, url = %url, "Fetching reference resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::status(
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or_default(),
                body,
            ));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&url, e))?;

        target
            .populate(&body)
            .map_err(|e| FetchError::decode(url, e))
    }
}

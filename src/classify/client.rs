//! HTTP client for the classification API.
//!
//! One GET per call, no retries, no redirect or timeout policy beyond the
//! reqwest defaults. The HTTP status code is not inspected; whatever body the
//! endpoint returns is handed to the decoder as-is.

use tracing::debug;
use url::Url;

use super::errors::{ClassifyError, ClassifyResult};

/// Default endpoint of the classification API.
pub const CLASSIFY_API_BASE: &str = "http://classify.oclc.org/classify2/Classify";

/// Client for the classification API
#[derive(Debug, Clone)]
pub struct ClassifyClient {
    client: reqwest::Client,
    base_url: Url,
}

impl ClassifyClient {
    /// Create a client against the default endpoint
    pub fn new() -> Self {
        // The constant is a valid URL; parsing it cannot fail.
        Self::with_base_url(Url::parse(CLASSIFY_API_BASE).expect("default classify URL is valid"))
    }

    /// Create a client against a custom endpoint (tests point this at a mock server)
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the full response body for `url` as raw bytes.
    ///
    /// At most one attempt: a failed request is `Transport`, a body that
    /// cannot be drained is `Read`.
    pub async fn fetch_raw(&self, url: Url) -> ClassifyResult<Vec<u8>> {
        debug!(url = %url, "classify request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClassifyError::Transport)?;

        let body = response.bytes().await.map_err(ClassifyError::Read)?;

        Ok(body.to_vec())
    }

    /// Fetch summary search results for a title query.
    pub async fn search_by_title(&self, query: &str) -> ClassifyResult<Vec<u8>> {
        self.fetch_raw(self.search_url(query)).await
    }

    /// Fetch the detail record for a single work identifier.
    pub async fn fetch_by_identifier(&self, id: &str) -> ClassifyResult<Vec<u8>> {
        self.fetch_raw(self.work_url(id)).await
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("summary", "true")
            .append_pair("title", query);
        url
    }

    fn work_url(&self, id: &str) -> Url {
        // `summary=tre` is the literal the endpoint accepts for single-work
        // lookups; do not "fix" it.
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("summary", "tre")
            .append_pair("owi", id);
        url
    }
}

impl Default for ClassifyClient {
    fn default() -> Self {
        Self::new()
    }
}

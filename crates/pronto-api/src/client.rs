//! HTTP client wrapper for the Pronto API.

use std::fmt;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;
use crate::models::{
    BulkEnrichmentRequest, BulkEnrichmentSummary, FileUploadAck, FileUploadRequest, LeadsPage,
    LeadsQuery, Search, SearchDetail,
};
use crate::retry::{execute_with_retry, RetryConfig};

/// Default base URL for the Pronto API.
const BASE_URL: &str = "https://api.prontohq.com/v1";

/// Environment variable overriding the API base URL.
const BASE_URL_ENV: &str = "PRONTO_BASE_URL";

/// Resolves the base URL from the environment, falling back to the default.
fn resolve_base_url() -> String {
    std::env::var(BASE_URL_ENV).unwrap_or_else(|_| BASE_URL.to_string())
}

/// Client for interacting with the Pronto API.
#[derive(Clone)]
pub struct ProntoClient {
    api_key: String,
    http_client: reqwest::Client,
    base_url: String,
    retry: RetryConfig,
}

impl ProntoClient {
    /// Creates a new ProntoClient with the given API key.
    ///
    /// The base URL is taken from the `PRONTO_BASE_URL` environment variable
    /// when set, otherwise the production default is used.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            http_client: reqwest::Client::new(),
            base_url: resolve_base_url(),
            retry: RetryConfig::default(),
        }
    }

    /// Returns a builder for a client with custom settings.
    pub fn builder(api_key: impl Into<String>) -> ProntoClientBuilder {
        ProntoClientBuilder::new(api_key)
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns a reference to the underlying HTTP client.
    pub fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =========================================================================
    // Typed endpoints
    // =========================================================================

    /// Fetches the saved search list.
    ///
    /// `GET /searches`
    pub async fn get_searches(&self) -> Result<Vec<Search>> {
        self.get("/searches").await
    }

    /// Fetches a single search in full, including its lead list.
    ///
    /// `GET /searches/{id}`
    pub async fn get_search(&self, id: &str) -> Result<SearchDetail> {
        self.get(&format!("/searches/{}", id)).await
    }

    /// Fetches one page of a search's leads.
    ///
    /// `GET /searches/{id}/leads?page=&limit=`
    pub async fn get_search_leads(&self, id: &str, query: LeadsQuery) -> Result<LeadsPage> {
        let params = serde_urlencoded::to_string(query)?;
        self.get(&format!("/searches/{}/leads?{}", id, params)).await
    }

    /// Submits a batch of contacts for enrichment.
    ///
    /// `POST /pronto/enrichments/contacts/bulk`
    pub async fn enrich_contacts_bulk(
        &self,
        request: &BulkEnrichmentRequest,
    ) -> Result<BulkEnrichmentSummary> {
        self.post("/pronto/enrichments/contacts/bulk", request).await
    }

    /// Uploads a file (base64 content prepared by [`FileUploadRequest`]).
    ///
    /// `POST /file`
    pub async fn upload_file(&self, request: &FileUploadRequest) -> Result<FileUploadAck> {
        self.post("/file", request).await
    }

    // =========================================================================
    // Generic request helpers
    // =========================================================================

    /// Performs a GET request to the given endpoint.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path (e.g., "/searches", "/searches/123")
    ///
    /// # Returns
    /// The deserialized response body.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        execute_with_retry(&self.retry, || {
            let request = self.http_client.get(&url).bearer_auth(&self.api_key);
            async move { request.send().await.map_err(Into::into) }
        })
        .await
    }

    /// Performs a POST request to the given endpoint with a JSON body.
    ///
    /// # Arguments
    /// * `endpoint` - The API endpoint path
    /// * `body` - The request body to serialize as JSON
    ///
    /// # Returns
    /// The deserialized response body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        execute_with_retry(&self.retry, || {
            let request = self
                .http_client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(body);
            async move { request.send().await.map_err(Into::into) }
        })
        .await
    }
}

impl fmt::Debug for ProntoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProntoClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Builder for [`ProntoClient`].
///
/// # Example
///
/// ```no_run
/// use pronto_api_rs::client::ProntoClient;
///
/// let client = ProntoClient::builder("api-key")
///     .base_url("https://staging.prontohq.com/v1")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ProntoClientBuilder {
    api_key: String,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl ProntoClientBuilder {
    /// Creates a builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            timeout: None,
        }
    }

    /// Overrides the base URL (takes precedence over `PRONTO_BASE_URL`).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets a request timeout on the underlying HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the client.
    pub fn build(self) -> Result<ProntoClient> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build()?;

        let base_url = self
            .base_url
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(resolve_base_url);

        Ok(ProntoClient {
            api_key: self.api_key,
            http_client,
            base_url,
            retry: RetryConfig::default(),
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

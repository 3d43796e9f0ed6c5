//! HTTP client for the suburban schedule search.

use std::time::Duration;

use tracing::debug;

use crate::error::LookupError;
use crate::query::SearchQuery;

/// Production search endpoint.
const DEFAULT_BASE_URL: &str = "https://www.tutu.ru/prigorod/search.php";

/// Configuration for the search client.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search endpoint URL
    pub base_url: String,
    /// Request timeout in seconds; `None` keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl SearchConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Page returned by the search endpoint.
#[derive(Debug, Clone)]
pub struct SearchResponse {
    /// URL after redirects
    pub url: String,
    pub body: String,
}

#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        // Builder failures (TLS backend setup) also mean no request can be
        // made, so they share the connectivity message.
        let http = builder.build().map_err(LookupError::Connectivity)?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Build the GET request for a query without sending it.
    pub fn build_request(&self, query: &SearchQuery) -> Result<reqwest::Request, LookupError> {
        self.http
            .get(&self.base_url)
            .query(&query.params())
            .build()
            .map_err(LookupError::Connectivity)
    }

    /// Send the search and return the final page.
    ///
    /// One attempt only. A transport failure is `Connectivity`, a final
    /// status outside 200..=399 is `Server`.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, LookupError> {
        let request = self.build_request(query)?;
        debug!(url = %request.url(), "sending schedule search");

        let response = self
            .http
            .execute(request)
            .await
            .map_err(LookupError::Connectivity)?;

        let status = response.status().as_u16();
        if !(200..=399).contains(&status) {
            return Err(LookupError::Server { status });
        }

        let url = response.url().to_string();
        debug!(%url, status, "search page received");
        let body = response.text().await.map_err(LookupError::Connectivity)?;

        Ok(SearchResponse { url, body })
    }
}

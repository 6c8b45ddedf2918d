//! HTTP client for the indices backend.

use crate::error::Error;
use crate::types::MarketStatus;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (e.g., "http://localhost:8082").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8082".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Response from the indices endpoint, whatever its status.
///
/// The body is kept as text so the caller can echo the status line and
/// headers before deciding whether the payload is usable.
#[derive(Debug, Clone)]
pub struct IndicesResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers as (name, value) pairs, in arrival order.
    pub headers: Vec<(String, String)>,
    /// Raw response body.
    pub text: String,
}

impl IndicesResponse {
    /// Whether the backend answered 200.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }

    /// Parses the body as JSON.
    ///
    /// # Errors
    /// Returns [`Error::HttpStatus`] for any status other than 200, or
    /// [`Error::Parse`] if the body is not valid JSON.
    pub fn json(&self) -> Result<serde_json::Value, Error> {
        if !self.is_ok() {
            return Err(Error::HttpStatus {
                status: self.status,
                body: self.text.clone(),
            });
        }
        Ok(serde_json::from_str(&self.text)?)
    }
}

/// HTTP client for the market indices backend.
#[derive(Debug, Clone)]
pub struct IndicesClient {
    client: Client,
    base_url: String,
}

impl IndicesClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        url::Url::parse(&config.base_url)?;
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client for `base_url` with the default timeout.
    ///
    /// # Errors
    /// Returns error if the base URL is invalid or the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the index quote endpoint.
    #[must_use]
    pub fn indices_url(&self) -> String {
        format!("{}/api/indices", self.base_url)
    }

    /// URL of the market status endpoint.
    #[must_use]
    pub fn market_status_url(&self) -> String {
        format!("{}/api/indices/market-status", self.base_url)
    }

    /// Fetches the current index quote.
    ///
    /// Any status is returned as-is; see [`IndicesResponse::json`].
    ///
    /// # Errors
    /// Returns error only if no complete response arrived.
    pub async fn fetch_indices(&self) -> Result<IndicesResponse, Error> {
        let url = self.indices_url();
        let resp = self.send(&url).await?;
        let status = resp.status();
        let headers = resp
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let text = if status == StatusCode::OK {
            resp.text().await?
        } else {
            error_body(resp, &url).await
        };

        Ok(IndicesResponse {
            status: status.as_u16(),
            headers,
            text,
        })
    }

    /// Fetches the market open/closed flag.
    ///
    /// # Errors
    /// Returns error if the request fails, the status is not 200, or the
    /// body is not a bare JSON boolean.
    pub async fn market_status(&self) -> Result<MarketStatus, Error> {
        let url = self.market_status_url();
        let resp = self.send(&url).await?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: error_body(resp, &url).await,
            });
        }

        let text = resp.text().await?;
        let open: bool = serde_json::from_str(&text)?;
        Ok(MarketStatus::new(open))
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    /// Issues a GET and logs the status line.
    async fn send(&self, url: &str) -> Result<reqwest::Response, Error> {
        let started = Instant::now();
        let resp = self.client.get(url).send().await?;
        debug!(
            url,
            status = resp.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "GET"
        );
        Ok(resp)
    }
}

/// Reads the body of an error response.
///
/// A body that cannot be read is logged and reported as empty, so the
/// status still reaches the caller.
pub(crate) async fn error_body(resp: reqwest::Response, url: &str) -> String {
    match resp.text().await {
        Ok(body) => body,
        Err(err) => {
            debug!(url, error = %err, "failed to read error response body");
            String::new()
        }
    }
}

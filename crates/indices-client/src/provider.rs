//! HTTP client for the third-party chart provider.

use crate::client::error_body;
use crate::error::Error;
use crate::types::ChartResponse;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};
use tracing::debug;


/// Desktop browser signature; the provider rejects default client agents.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Provider client configuration.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider (e.g., "https://query1.finance.yahoo.com").
    pub base_url: String,
    /// `User-Agent` sent with every request.
    pub user_agent: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://query1.finance.yahoo.com".to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// HTTP client for the chart provider.
#[derive(Debug, Clone)]
pub struct QuoteProviderClient {
    client: Client,
    base_url: String,
}

impl QuoteProviderClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the base URL or user agent is invalid, or the HTTP
    /// client cannot be built.
    pub fn new(config: ProviderConfig) -> Result<Self, Error> {
        url::Url::parse(&config.base_url)?;

        let mut headers = HeaderMap::new();
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| Error::InvalidHeader(e.to_string()))?;
        headers.insert(USER_AGENT, agent);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the chart endpoint for `symbol`.
    #[must_use]
    pub fn chart_url(&self, symbol: &str) -> String {
        format!("{}/v8/finance/chart/{}", self.base_url, symbol)
    }

    /// Fetches the chart for a provider symbol such as `^NSEI`.
    ///
    /// # Errors
    /// Returns error if the request fails, the status is not 200, or the
    /// body does not match the chart envelope.
    pub async fn chart(&self, symbol: &str) -> Result<ChartResponse, Error> {
        let url = self.chart_url(symbol);
        let started = Instant::now();
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "GET"
        );

        if status != StatusCode::OK {
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: error_body(resp, &url).await,
            });
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

//! Check routines.
//!
//! Each routine performs one request, classifies any failure into a
//! [`CheckError`] and returns a structured outcome for the reporter. No
//! routine retries, and a failure never escapes the routine that hit it.

use crate::config::{RangeConfig, SymbolConfig};
use crate::error::CheckError;
use crate::validate::{ValidatedIndices, validate_indices};
use indices_client::{IndicesClient, IndicesResponse, MarketStatus, QuoteProviderClient};
use tracing::{debug, warn};


/// Status line and headers of a response that arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, in arrival order.
    pub headers: Vec<(String, String)>,
}

/// Successful indices check.
#[derive(Debug, Clone)]
pub struct IndicesOutcome {
    /// Body as received.
    pub body: serde_json::Value,
    /// Validation result.
    pub validated: ValidatedIndices,
}

/// One indices check.
#[derive(Debug)]
pub struct IndicesCheck {
    /// Present whenever the backend answered, whatever the verdict.
    pub head: Option<ResponseHead>,
    /// Check result.
    pub result: Result<IndicesOutcome, CheckError>,
}

impl IndicesCheck {
    /// Whether the payload passed every hard check.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Successful provider check.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteOutcome {
    /// The provider returned a result with metadata.
    Prices {
        /// Latest regular-session price.
        regular_market_price: Option<f64>,
        /// Previous session close.
        previous_close: Option<f64>,
        /// Quote currency.
        currency: Option<String>,
        /// Price minus previous close.
        change: Option<f64>,
        /// Change relative to the previous close, in percent.
        change_percent: Option<f64>,
    },
    /// The provider returned no result entries.
    NoData,
}

/// One provider check, tagged with the instrument it checked.
#[derive(Debug)]
pub struct QuoteCheck {
    /// The instrument.
    pub symbol: SymbolConfig,
    /// Check result.
    pub result: Result<QuoteOutcome, CheckError>,
}

impl QuoteCheck {
    /// Whether the provider answered with usable data.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.result, Ok(QuoteOutcome::Prices { .. }))
    }
}

/// Fetches `/api/indices` and validates the payload.
///
/// Transport, status, parse and schema failures land in
/// [`IndicesCheck::result`]. Out-of-range prices are not failures; see
/// [`ValidatedIndices::warnings`].
pub async fn check_indices(client: &IndicesClient, ranges: &RangeConfig) -> IndicesCheck {
    let resp = match client.fetch_indices().await {
        Ok(resp) => resp,
        Err(e) => {
            let err = CheckError::from(e);
            warn!(url = %client.indices_url(), error = %err, "indices request failed");
            return IndicesCheck {
                head: None,
                result: Err(err),
            };
        }
    };

    let result = evaluate_indices(&resp, ranges);
    if let Err(err) = &result {
        warn!(status = resp.status, error = %err, "indices response rejected");
    }

    IndicesCheck {
        head: Some(ResponseHead {
            status: resp.status,
            headers: resp.headers,
        }),
        result,
    }
}

fn evaluate_indices(
    resp: &IndicesResponse,
    ranges: &RangeConfig,
) -> Result<IndicesOutcome, CheckError> {
    let body = resp.json()?;

    let validated = match validate_indices(&body, ranges) {
        Ok(validated) => validated,
        Err(e) => return Err(CheckError::schema(e, body)),
    };

    for check in validated.warnings() {
        debug!(label = check.label, value = check.value, "price outside plausible range");
    }

    Ok(IndicesOutcome { body, validated })
}

/// Fetches `/api/indices/market-status`.
///
/// # Errors
/// Returns the classified failure, including a non-boolean body.
pub async fn check_market_status(client: &IndicesClient) -> Result<MarketStatus, CheckError> {
    client.market_status().await.map_err(|e| {
        let err = CheckError::from(e);
        warn!(url = %client.market_status_url(), error = %err, "market status request failed");
        err
    })
}

/// Checks the chart endpoint for one provider symbol.
///
/// # Errors
/// Returns the classified failure. An empty or absent result list is
/// [`QuoteOutcome::NoData`], not an error.
pub async fn check_quote(
    client: &QuoteProviderClient,
    symbol: &str,
) -> Result<QuoteOutcome, CheckError> {
    let chart = client.chart(symbol).await.map_err(|e| {
        let err = CheckError::from(e);
        warn!(symbol, error = %err, "chart request failed");
        err
    })?;

    if !chart.has_result() {
        return Ok(QuoteOutcome::NoData);
    }

    let meta = chart.first_meta().cloned().unwrap_or_default();
    Ok(QuoteOutcome::Prices {
        change: meta.change(),
        change_percent: meta.change_percent(),
        regular_market_price: meta.regular_market_price,
        previous_close: meta.previous_close,
        currency: meta.currency,
    })
}

/// Runs [`check_quote`] for every symbol, in order, without stopping early.
pub async fn check_quotes(
    client: &QuoteProviderClient,
    symbols: &[SymbolConfig],
) -> Vec<QuoteCheck> {
    let mut checks = Vec::with_capacity(symbols.len());
    for entry in symbols {
        let result = check_quote(client, &entry.symbol).await;
        checks.push(QuoteCheck {
            symbol: entry.clone(),
            result,
        });
    }
    checks
}

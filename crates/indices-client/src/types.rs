//! Response types for the indices backend and the chart provider.

use serde::{Deserialize, Serialize};


// ============================================================================
// Backend
// ============================================================================

/// Open/closed flag published by the backend's market-status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarketStatus {
    /// Whether the exchange is currently accepting trades.
    pub open: bool,
}

impl MarketStatus {
    /// Creates a status from the raw flag.
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }
}

impl std::fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.open {
            write!(f, "OPEN")
        } else {
            write!(f, "CLOSED")
        }
    }
}

// ============================================================================
// Chart provider
// ============================================================================

/// Top-level chart endpoint response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartResponse {
    /// Chart envelope.
    #[serde(default)]
    pub chart: Option<Chart>,
}

impl ChartResponse {
    /// Returns the metadata of the first result, if the provider sent any.
    #[must_use]
    pub fn first_meta(&self) -> Option<&ChartMeta> {
        self.chart
            .as_ref()?
            .result
            .as_ref()?
            .first()?
            .meta
            .as_ref()
    }

    /// Whether the response carries at least one result entry.
    #[must_use]
    pub fn has_result(&self) -> bool {
        self.chart
            .as_ref()
            .and_then(|c| c.result.as_ref())
            .is_some_and(|r| !r.is_empty())
    }
}

/// Chart envelope holding the result list and provider error, if any.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Chart {
    /// Result entries, one per requested symbol.
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    /// Provider-side error object.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// A single chart result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChartResult {
    /// Instrument metadata.
    #[serde(default)]
    pub meta: Option<ChartMeta>,
}

/// Instrument metadata from a chart result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    /// Quote currency.
    #[serde(default)]
    pub currency: Option<String>,
    /// Provider symbol.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Latest regular-session price.
    #[serde(default)]
    pub regular_market_price: Option<f64>,
    /// Previous session close.
    #[serde(default)]
    pub previous_close: Option<f64>,
    /// Close preceding the chart range.
    #[serde(default)]
    pub chart_previous_close: Option<f64>,
}

impl ChartMeta {
    /// Absolute change of the regular price against the previous close.
    #[must_use]
    pub fn change(&self) -> Option<f64> {
        Some(self.regular_market_price? - self.previous_close?)
    }

    /// Percentage change of the regular price against the previous close.
    #[must_use]
    pub fn change_percent(&self) -> Option<f64> {
        let prev = self.previous_close?;
        if prev == 0.0 {
            return None;
        }
        Some(self.change()? / prev * 100.0)
    }
}

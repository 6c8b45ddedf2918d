//! Structural validation of the indices payload.
//!
//! Hard checks (required keys, scalar types) produce a [`SchemaError`]; the
//! soft range check only produces warnings on an otherwise valid quote.

use crate::config::{PriceRange, RangeConfig};
use serde_json::{Map, Value};


/// Keys the indices payload must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["nifty", "banknifty", "marketOpen", "lastUpdated"];

/// Hard validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// The body is valid JSON but not an object.
    #[error("Response body is not a JSON object")]
    NotAnObject,

    /// One or more required keys are absent.
    #[error("Missing required fields: {}", python_list(.0))]
    MissingFields(Vec<String>),

    /// A required key holds the wrong JSON type.
    #[error("{} should be {}", field_label(.field), .expected)]
    WrongType {
        /// Offending key.
        field: String,
        /// Expected type, with article (e.g. "a number").
        expected: &'static str,
    },
}

/// Human label for a payload key, as printed by the reporter.
#[must_use]
pub fn field_label(field: &str) -> &str {
    match field {
        "nifty" => "Nifty price",
        "banknifty" => "Bank Nifty price",
        "marketOpen" => "Market open status",
        "lastUpdated" => "Last updated timestamp",
        other => other,
    }
}

fn python_list(fields: &[String]) -> String {
    let quoted: Vec<String> = fields.iter().map(|f| format!("'{}'", f)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Optional day-change figures the backend may publish alongside prices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndexChanges {
    /// Absolute change of the broad-market index.
    pub nifty_change: Option<f64>,
    /// Percentage change of the broad-market index.
    pub nifty_change_percent: Option<f64>,
    /// Absolute change of the banking index.
    pub banknifty_change: Option<f64>,
    /// Percentage change of the banking index.
    pub banknifty_change_percent: Option<f64>,
}

impl IndexChanges {
    /// Whether any change figure is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A structurally valid index quote.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexQuote {
    /// Broad-market index level.
    pub nifty: f64,
    /// Banking index level.
    pub banknifty: f64,
    /// Whether the market is open.
    pub market_open: bool,
    /// Backend timestamp, verbatim when it is a string.
    pub last_updated: String,
    /// Optional change figures.
    pub changes: IndexChanges,
}

/// Result of the soft range check for one price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCheck {
    /// Display label (e.g. "Nifty").
    pub label: &'static str,
    /// Observed price.
    pub value: f64,
    /// Plausible range.
    pub range: PriceRange,
}

impl RangeCheck {
    /// Whether the value lies in the plausible range.
    #[must_use]
    pub fn is_reasonable(&self) -> bool {
        self.range.contains(self.value)
    }
}

/// Outcome of a successful validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedIndices {
    /// The parsed quote.
    pub quote: IndexQuote,
    /// Range checks, broad-market index first.
    pub range_checks: [RangeCheck; 2],
}

impl ValidatedIndices {
    /// Range checks that fell outside their plausible range.
    pub fn warnings(&self) -> impl Iterator<Item = &RangeCheck> {
        self.range_checks.iter().filter(|c| !c.is_reasonable())
    }
}

/// Validates an indices payload.
///
/// Missing keys are collected before any type is inspected; type checks
/// stop at the first mismatch in the order `nifty`, `banknifty`,
/// `marketOpen`. Range violations never fail validation.
///
/// # Errors
/// Returns the first hard violation found.
pub fn validate_indices(
    body: &Value,
    ranges: &RangeConfig,
) -> Result<ValidatedIndices, SchemaError> {
    let obj = body.as_object().ok_or(SchemaError::NotAnObject)?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|f| !obj.contains_key(**f))
        .map(|f| (*f).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(SchemaError::MissingFields(missing));
    }

    let nifty = number_field(obj, "nifty")?;
    let banknifty = number_field(obj, "banknifty")?;
    let market_open = obj["marketOpen"]
        .as_bool()
        .ok_or_else(|| wrong_type("marketOpen", "a boolean"))?;

    let last_updated = match &obj["lastUpdated"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let changes = IndexChanges {
        nifty_change: optional_number(obj, "niftyChange"),
        nifty_change_percent: optional_number(obj, "niftyChangePercent"),
        banknifty_change: optional_number(obj, "bankniftyChange"),
        banknifty_change_percent: optional_number(obj, "bankniftyChangePercent"),
    };

    Ok(ValidatedIndices {
        quote: IndexQuote {
            nifty,
            banknifty,
            market_open,
            last_updated,
            changes,
        },
        range_checks: [
            RangeCheck {
                label: "Nifty",
                value: nifty,
                range: ranges.nifty,
            },
            RangeCheck {
                label: "Bank Nifty",
                value: banknifty,
                range: ranges.banknifty,
            },
        ],
    })
}

fn number_field(obj: &Map<String, Value>, field: &str) -> Result<f64, SchemaError> {
    obj[field]
        .as_f64()
        .ok_or_else(|| wrong_type(field, "a number"))
}

fn optional_number(obj: &Map<String, Value>, field: &str) -> Option<f64> {
    obj.get(field).and_then(Value::as_f64)
}

fn wrong_type(field: &str, expected: &'static str) -> SchemaError {
    SchemaError::WrongType {
        field: field.to_string(),
        expected,
    }
}

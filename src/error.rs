//! Error types for the check routines.

use crate::validate::SchemaError;


/// Why a single check failed.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Server unreachable.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// No response within the request timeout.
    #[error("Request timed out")]
    Timeout,

    /// Non-200 response.
    #[error("Request failed with status {status}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Well-formed JSON that does not match the expected shape.
    #[error("Schema violation: {source}")]
    Schema {
        /// The violated rule.
        source: SchemaError,
        /// Body that failed validation.
        body: serde_json::Value,
    },

    /// Malformed JSON body.
    #[error("Invalid JSON response: {0}")]
    Parse(String),

    /// Anything else.
    #[error("{0}")]
    Unexpected(String),
}

/// Tag of a [`CheckError`], for matching without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckErrorKind {
    /// See [`CheckError::Connection`].
    Connection,
    /// See [`CheckError::Timeout`].
    Timeout,
    /// See [`CheckError::HttpStatus`].
    HttpStatus,
    /// See [`CheckError::Schema`].
    Schema,
    /// See [`CheckError::Parse`].
    Parse,
    /// See [`CheckError::Unexpected`].
    Unexpected,
}

impl CheckError {
    /// Returns the error tag.
    #[must_use]
    pub fn kind(&self) -> CheckErrorKind {
        match self {
            CheckError::Connection(_) => CheckErrorKind::Connection,
            CheckError::Timeout => CheckErrorKind::Timeout,
            CheckError::HttpStatus { .. } => CheckErrorKind::HttpStatus,
            CheckError::Schema { .. } => CheckErrorKind::Schema,
            CheckError::Parse(_) => CheckErrorKind::Parse,
            CheckError::Unexpected(_) => CheckErrorKind::Unexpected,
        }
    }

    /// Wraps a validation failure together with the offending body.
    #[must_use]
    pub fn schema(source: SchemaError, body: serde_json::Value) -> Self {
        CheckError::Schema { source, body }
    }
}

impl From<indices_client::Error> for CheckError {
    fn from(err: indices_client::Error) -> Self {
        use indices_client::Error;

        match err {
            Error::Connection(msg) => CheckError::Connection(msg),
            Error::Timeout => CheckError::Timeout,
            Error::HttpStatus { status, body } => CheckError::HttpStatus { status, body },
            Error::Parse(e) => CheckError::Parse(e.to_string()),
            other => CheckError::Unexpected(other.to_string()),
        }
    }
}

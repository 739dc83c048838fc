//! Error types for the adapter
//!
//! Every failure from the underlying driver is wrapped once and re-raised
//! unchanged — there is no local recovery and no retry anywhere in the crate.

use std::fmt;

/// Result type alias for adapter operations
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Error types for adapter operations
#[derive(Debug, Clone)]
pub enum AdapterError {
    /// Database query error
    Database(String),
    /// Connection or pool error
    Connection(String),
    /// Configuration error
    Configuration(String),
    /// Entity mapping registration error
    Schema(String),
    /// Query building error
    Query(String),
    /// Row decoding error
    Serialization(String),
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdapterError::Database(msg) => write!(f, "Database error: {}", msg),
            AdapterError::Connection(msg) => write!(f, "Connection error: {}", msg),
            AdapterError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            AdapterError::Schema(msg) => write!(f, "Schema error: {}", msg),
            AdapterError::Query(msg) => write!(f, "Query error: {}", msg),
            AdapterError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for AdapterError {}

// Convert from sqlx errors
impl From<sqlx::Error> for AdapterError {
    fn from(err: sqlx::Error) -> Self {
        AdapterError::Database(err.to_string())
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        AdapterError::Serialization(err.to_string())
    }
}

//! Error types for shelfwise.
//!
//! Uses thiserror for ergonomic error handling with proper
//! error chain propagation. Query-time operations never fail; these types
//! cover the load boundary (catalog files, config files, row quarantine).

use std::path::PathBuf;
use thiserror::Error;

/// Top-level engine error.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Catalog source errors (the file or payload as a whole).
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog must be a JSON array or an object with a \"products\" array, found {found}")]
    Shape { found: &'static str },
}

/// Reason a single raw row was quarantined by the normalizer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("row is not a JSON object (found {found})")]
    NotAnObject { found: &'static str },

    #[error("row has no usable id")]
    MissingId,

    #[error("row has no usable name")]
    MissingName,
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Result type alias for catalog source operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

// Error code implementations for machine-readable error responses
impl EngineError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Catalog(e) => e.code(),
            Self::Io(_) => "IO_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl CatalogError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "CATALOG_READ_ERROR",
            Self::Parse(_) => "CATALOG_PARSE_ERROR",
            Self::Shape { .. } => "CATALOG_SHAPE_ERROR",
        }
    }
}

impl RowRejection {
    /// Returns a machine-readable error code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotAnObject { .. } => "ROW_NOT_OBJECT",
            Self::MissingId => "ROW_MISSING_ID",
            Self::MissingName => "ROW_MISSING_NAME",
        }
    }
}

/// Names the JSON kind of a value, for error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_propagate() {
        let err: EngineError = CatalogError::Shape { found: "string" }.into();
        assert_eq!(err.code(), "CATALOG_SHAPE_ERROR");
        assert_eq!(EngineError::Config("bad".into()).code(), "CONFIG_ERROR");
        assert_eq!(RowRejection::MissingId.code(), "ROW_MISSING_ID");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(RowRejection::MissingName.to_string(), "row has no usable name");
        let msg = RowRejection::NotAnObject { found: "array" }.to_string();
        assert!(msg.contains("array"));
    }
}

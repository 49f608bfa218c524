//! Error types for loading and validating table definitions.

use thiserror::Error;

/// Error type for loading table definitions.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error type for table definition validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Table name is empty.
    #[error("table at index {index} has an empty name")]
    EmptyTableName {
        /// Position of the table in the input list.
        index: usize,
    },

    /// Table name cannot be turned into a class identifier.
    #[error("table name '{name}' is not a valid identifier")]
    InvalidTableName {
        /// Offending table name.
        name: String,
    },
}

impl SchemaError {
    /// Creates an invalid table name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidTableName { name: name.into() }
    }
}

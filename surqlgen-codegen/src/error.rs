//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Table definition loading error.
    #[error("table definition parse error: {0}")]
    Parse(#[from] surqlgen_schema::ParseError),

    /// Table definition validation error.
    #[error("schema error: {0}")]
    Schema(#[from] surqlgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

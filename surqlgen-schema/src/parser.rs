//! Loader for table definitions.
//!
//! Table definitions arrive already parsed from SurQL by an external tool and
//! are exchanged as a JSON array of tables.

use crate::error::ParseError;
use crate::types::TableDefinition;
use std::path::Path;

/// Parses a JSON array of table definitions.
///
/// # Arguments
/// * `json` - JSON document whose root is an array of tables
///
/// # Returns
/// The tables in document order.
///
/// # Errors
/// Returns `ParseError::Json` if the document is malformed, `null`, or not an
/// array.
pub fn parse_tables_json(json: &str) -> Result<Vec<TableDefinition>, ParseError> {
    let tables: Vec<TableDefinition> = serde_json::from_str(json)?;
    tracing::debug!("Loaded {} table definitions", tables.len());
    Ok(tables)
}

/// Reads and parses a JSON file of table definitions.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or parsed.
pub fn load_tables(path: &Path) -> Result<Vec<TableDefinition>, ParseError> {
    let json = std::fs::read_to_string(path)?;
    parse_tables_json(&json)
}

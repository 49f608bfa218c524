//! Table definition validation.
//!
//! Generation degrades gracefully for unknown field types and missing
//! references, so the only checks here are the ones that would make the
//! output uncompilable: table names that cannot become identifiers.

use crate::error::SchemaError;
use crate::types::TableDefinition;

/// Validates a list of table definitions before generation.
///
/// # Errors
/// Returns `SchemaError` for the first table whose name is empty or not an
/// identifier.
pub fn validate_tables(tables: &[TableDefinition]) -> Result<(), SchemaError> {
    for (index, table) in tables.iter().enumerate() {
        validate_table_name(index, &table.name)?;
    }
    Ok(())
}

/// Validates a single table name.
fn validate_table_name(index: usize, name: &str) -> Result<(), SchemaError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(SchemaError::EmptyTableName { index });
    };

    if !is_identifier_start(first) || !chars.all(is_identifier_part) {
        return Err(SchemaError::invalid_name(name));
    }

    Ok(())
}

/// Returns true if `name` is a non-empty ASCII identifier
/// (`[A-Za-z_$][A-Za-z0-9_$]*`).
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(is_identifier_start) && chars.all(is_identifier_part)
}

const fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

const fn is_identifier_part(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

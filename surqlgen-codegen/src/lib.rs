//! # surqlgen Codegen
//!
//! Effect Schema code generation from SurrealDB table definitions.
//!
//! This crate provides:
//! - Class name formatting
//! - Field type mapping to `Schema` expressions
//! - Description and default value annotations
//! - Class and document generation with a shared record id helper

pub mod config;
pub mod effect;
pub mod error;
pub mod generator;
pub mod naming;

pub use config::GeneratorConfig;
pub use effect::{build_annotations, emit_table_class, map_field_type};
pub use error::CodegenError;
pub use generator::Generator;
pub use naming::format_class_name;

use std::path::Path;
use surqlgen_schema::TableDefinition;

/// Generates an Effect Schema module from table definitions.
///
/// # Arguments
/// * `tables` - Normalized table definitions
///
/// # Returns
/// Generated TypeScript source as a string.
///
/// # Errors
/// Returns `CodegenError` if a table name is empty or not an identifier.
pub fn generate_schema_document(tables: &[TableDefinition]) -> Result<String, CodegenError> {
    Generator::new(tables).generate()
}

/// Generates an Effect Schema module from a JSON array of table definitions.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    let tables = surqlgen_schema::parse_tables_json(json)?;
    generate_schema_document(&tables)
}

/// Generates an Effect Schema module from a JSON file of table definitions.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let tables = surqlgen_schema::load_tables(path)?;
    generate_schema_document(&tables)
}

/// Generates an Effect Schema module and writes it to `path`.
///
/// # Errors
/// Returns `CodegenError` if generation fails or the file cannot be written.
pub fn write_schema_file(tables: &[TableDefinition], path: &Path) -> Result<(), CodegenError> {
    let source = generate_schema_document(tables)?;
    std::fs::write(path, source)?;
    tracing::info!("Wrote {} table classes to {}", tables.len(), path.display());
    Ok(())
}

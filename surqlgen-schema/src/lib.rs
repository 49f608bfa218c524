//! # surqlgen Schema
//!
//! Intermediate model of SurrealDB table schemas.
//!
//! This crate provides:
//! - Table, field, and reference definitions
//! - The field type vocabulary
//! - JSON loading of pre-parsed schemas
//! - Validation of table names before generation

pub mod error;
pub mod parser;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use parser::{load_tables, parse_tables_json};
pub use types::{FieldDefinition, FieldKind, FieldReference, TableDefinition};
pub use validation::{is_identifier, validate_tables};

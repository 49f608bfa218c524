//! # surqlgen
//!
//! Generates Effect Schema classes from SurrealDB table definitions.
//!
//! Given tables already parsed from SurQL into the normalized model, surqlgen
//! produces a TypeScript module with one `Schema.Class` per table and a
//! branded `recordId` helper for record links.
//!
//! ## Features
//!
//! - **Deterministic output** - Equal input always yields byte-identical source
//! - **Typed record links** - `record` and `array_record` fields are scoped to their target table
//! - **Graceful fallbacks** - Unknown types become strings, untyped links become pattern-checked strings
//! - **Annotations** - Descriptions and defaults are carried into `.annotations({ ... })`
//!
//! ## Quick Start
//!
//! ```
//! use surqlgen::prelude::*;
//!
//! let tables = vec![
//!     TableDefinition::new("user")
//!         .with_field(FieldDefinition::new("name", "string"))
//!         .with_field(FieldDefinition::new("age", "int").optional()),
//! ];
//!
//! let source = generate_schema_document(&tables)?;
//! assert!(source.contains("export class User extends Schema.Class<User>(\"user\")"));
//! # Ok::<(), surqlgen::CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Table and field definitions, JSON loading, validation
//! - [`codegen`] - Effect Schema generation

pub mod prelude;

/// Table and field definitions.
pub mod schema {
    pub use surqlgen_schema::*;
}

/// Effect Schema code generation.
pub mod codegen {
    pub use surqlgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use surqlgen_codegen::{
    CodegenError, Generator, GeneratorConfig, generate_from_file, generate_from_json,
    generate_schema_document, write_schema_file,
};
pub use surqlgen_schema::{FieldDefinition, FieldKind, FieldReference, TableDefinition};

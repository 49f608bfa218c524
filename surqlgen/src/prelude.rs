//! Prelude module for convenient imports.
//!
//! ```
//! use surqlgen::prelude::*;
//! ```

// Model types
pub use surqlgen_schema::{
    FieldDefinition, FieldKind, FieldReference, ParseError, SchemaError, TableDefinition,
    load_tables, parse_tables_json, validate_tables,
};

// Generation
pub use surqlgen_codegen::{
    CodegenError, Generator, GeneratorConfig, build_annotations, emit_table_class,
    format_class_name, generate_from_file, generate_from_json, generate_schema_document,
    map_field_type, write_schema_file,
};

//! Effect Schema code generation modules.

pub mod annotations;
pub mod classes;
pub mod fields;
pub mod preamble;

pub use annotations::build_annotations;
pub use classes::{ClassGenerator, emit_table_class};
pub use fields::{FieldTypeMapper, map_field_type};
pub use preamble::PreambleGenerator;

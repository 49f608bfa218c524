//! Field type mapping.

use crate::config::GeneratorConfig;
use crate::naming::double_quoted;
use surqlgen_schema::{FieldDefinition, FieldKind};

/// Pattern enforced by the record identifier helper.
pub const RECORD_ID_PATTERN: &str = "/^[a-zA-Z0-9_-]+:[a-zA-Z0-9_-]+$/";

/// Pattern for a `record` field with no known target table.
///
/// Kept distinct from [`RECORD_ID_PATTERN`]; generated output depends on it.
pub const UNTYPED_RECORD_PATTERN: &str = r"/^[\w-]+:[\w-]+$/";

/// Maps field definitions to Effect Schema expressions.
pub struct FieldTypeMapper<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> FieldTypeMapper<'a> {
    /// Creates a new field type mapper.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the schema expression for a field of the given table,
    /// wrapped in `Schema.optional` when the field is optional.
    ///
    /// `datetime` fields are never wrapped.
    #[must_use]
    pub fn map_field_type(&self, field: &FieldDefinition, table_name: &str) -> String {
        let kind = field.kind();
        let expr = self.base_expression(field, kind, table_name);

        if field.optional && kind != FieldKind::Datetime {
            format!("Schema.optional({expr})")
        } else {
            expr
        }
    }

    /// Returns the unwrapped schema expression for a field.
    fn base_expression(
        &self,
        field: &FieldDefinition,
        kind: FieldKind,
        table_name: &str,
    ) -> String {
        let reference = field.reference_table();
        if kind.is_relational() && reference.is_none() {
            tracing::warn!(
                "Field {}.{} has type {} but no reference, using untyped record id",
                table_name,
                field.name,
                field.type_name
            );
        }

        match kind {
            FieldKind::Int => "Schema.Number.pipe(Schema.int())".to_string(),
            FieldKind::Float => "Schema.Number".to_string(),
            FieldKind::Bool => "Schema.Boolean".to_string(),
            FieldKind::Datetime => "Schema.Date".to_string(),
            FieldKind::Array => "Schema.Array(Schema.String)".to_string(),
            FieldKind::ArrayFloat => "Schema.Array(Schema.Number)".to_string(),
            FieldKind::ArrayRecord => match reference {
                Some(target) => format!("Schema.Array({})", self.record_id(target)),
                None => format!(
                    "Schema.Array(Schema.String.pipe(Schema.pattern({RECORD_ID_PATTERN})))"
                ),
            },
            FieldKind::Object => {
                "Schema.Record({ key: Schema.String, value: Schema.Unknown })".to_string()
            }
            FieldKind::Record => match reference {
                Some(target) => {
                    if is_self_reference(field, table_name) {
                        tracing::debug!(
                            "Field {}.{} references its own table",
                            table_name,
                            field.name
                        );
                    }
                    self.record_id(target)
                }
                None => format!("Schema.String.pipe(Schema.pattern({UNTYPED_RECORD_PATTERN}))"),
            },
            FieldKind::References => match reference {
                Some(target) => format!("Schema.Array({})", self.record_id(target)),
                None => "Schema.Array(Schema.String)".to_string(),
            },
            FieldKind::Other => "Schema.String".to_string(),
        }
    }

    /// Returns the record identifier expression scoped to a table.
    #[must_use]
    pub fn record_id(&self, table: &str) -> String {
        format!("{}({})", self.config.helper_name(), double_quoted(table))
    }
}

/// Returns true if the field links to records of its own table.
#[must_use]
pub fn is_self_reference(field: &FieldDefinition, table_name: &str) -> bool {
    field.kind().is_relational() && field.reference_table() == Some(table_name)
}

/// Maps a field using the default configuration.
#[must_use]
pub fn map_field_type(field: &FieldDefinition, table_name: &str) -> String {
    let config = GeneratorConfig::default();
    FieldTypeMapper::new(&config).map_field_type(field, table_name)
}

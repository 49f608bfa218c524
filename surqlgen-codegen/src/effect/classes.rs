//! Class generation for tables.

use crate::config::GeneratorConfig;
use crate::effect::annotations::build_annotations;
use crate::effect::fields::FieldTypeMapper;
use crate::naming::{doc_comment, double_quoted, format_class_name, property_key};
use surqlgen_schema::TableDefinition;

/// Description attached to a synthesized `id` field.
pub const ID_DESCRIPTION: &str = "Unique identifier";

/// Generator for `Schema.Class` definitions.
pub struct ClassGenerator<'a> {
    config: &'a GeneratorConfig,
    mapper: FieldTypeMapper<'a>,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            mapper: FieldTypeMapper::new(config),
        }
    }

    /// Generates the class definition for a table.
    #[must_use]
    pub fn generate(&self, table: &TableDefinition) -> String {
        let class_name = format_class_name(&table.name);
        tracing::debug!("Generating class {} for table {}", class_name, table.name);

        let mut output = String::new();

        if let Some(description) = &table.description {
            output.push_str(&doc_comment(description));
        }

        let export = if self.config.exports_classes() {
            "export "
        } else {
            ""
        };
        output.push_str(&format!(
            "{export}class {class_name} extends Schema.Class<{class_name}>({})({{\n",
            double_quoted(&table.name)
        ));
        output.push_str(&self.field_lines(table).join(",\n"));
        output.push_str("\n}) {}");

        output
    }

    /// Returns one line per field, starting with a synthesized `id` when the
    /// table does not declare one.
    fn field_lines(&self, table: &TableDefinition) -> Vec<String> {
        let mut lines = Vec::with_capacity(table.fields.len() + 1);

        if !table.has_id_field() {
            lines.push(format!(
                "  id: {}.annotations({{ description: '{ID_DESCRIPTION}' }})",
                self.mapper.record_id(&table.name)
            ));
        }

        for field in &table.fields {
            tracing::trace!("Mapping field {}.{}", table.name, field.name);
            lines.push(format!(
                "  {}: {}{}",
                property_key(&field.name),
                self.mapper.map_field_type(field, &table.name),
                build_annotations(field)
            ));
        }

        lines
    }
}

/// Generates a table class using the default configuration.
#[must_use]
pub fn emit_table_class(table: &TableDefinition) -> String {
    let config = GeneratorConfig::default();
    ClassGenerator::new(&config).generate(table)
}

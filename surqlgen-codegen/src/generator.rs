//! Document generator.
//!
//! Combines the preamble and one class per table into a single TypeScript
//! module.

use crate::config::GeneratorConfig;
use crate::effect::{ClassGenerator, PreambleGenerator};
use crate::error::CodegenError;
use surqlgen_schema::{TableDefinition, validate_tables};

/// Generates an Effect Schema module from table definitions.
pub struct Generator<'a> {
    tables: &'a [TableDefinition],
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    /// Creates a generator with the default configuration.
    #[must_use]
    pub fn new(tables: &'a [TableDefinition]) -> Self {
        Self::with_config(tables, GeneratorConfig::default())
    }

    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn with_config(tables: &'a [TableDefinition], config: GeneratorConfig) -> Self {
        Self { tables, config }
    }

    /// Returns the generator configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates the complete document.
    ///
    /// The preamble comes first, followed by every table's class in input
    /// order, separated by blank lines. An empty table list yields only the
    /// preamble.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if a table name is empty or not an
    /// identifier.
    pub fn generate(&self) -> Result<String, CodegenError> {
        validate_tables(self.tables)?;
        tracing::debug!("Generating {} table classes", self.tables.len());

        let classes = ClassGenerator::new(&self.config);
        let mut sections = Vec::with_capacity(self.tables.len() + 1);
        sections.push(PreambleGenerator::new(&self.config).generate());
        sections.extend(self.tables.iter().map(|table| classes.generate(table)));

        let mut output = sections.join("\n\n");
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surqlgen_schema::{FieldDefinition, SchemaError};

    fn sample_tables() -> Vec<TableDefinition> {
        vec![
            TableDefinition::new("user")
                .with_field(FieldDefinition::new("name", "string"))
                .with_field(FieldDefinition::new("age", "int").optional()),
            TableDefinition::new("post")
                .with_field(FieldDefinition::new("author", "record").with_reference("user")),
        ]
    }

    #[test]
    fn test_generate_empty_is_preamble() {
        let config = GeneratorConfig::default();
        let preamble = PreambleGenerator::new(&config).generate();
        let output = Generator::new(&[]).generate().expect("generation failed");
        assert_eq!(output, format!("{preamble}\n"));
    }

    #[test]
    fn test_generate_preserves_table_order() {
        let tables = sample_tables();
        let output = Generator::new(&tables).generate().expect("generation failed");

        let user_pos = output.find("class User ").expect("User class");
        let post_pos = output.find("class Post ").expect("Post class");
        assert!(user_pos < post_pos);
        assert!(output.contains("}) {}\n\nexport class Post"));
        assert!(output.ends_with("}) {}\n"));
    }

    #[test]
    fn test_generate_preamble_emitted_once() {
        let tables = sample_tables();
        let output = Generator::new(&tables).generate().expect("generation failed");
        assert_eq!(output.matches("export const recordId").count(), 1);
        assert_eq!(output.matches("import { Schema }").count(), 1);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let tables = sample_tables();
        let first = Generator::new(&tables).generate().expect("generation failed");
        let second = Generator::new(&tables.clone()).generate().expect("generation failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_duplicate_names_both_emitted() {
        let tables = vec![TableDefinition::new("tag"), TableDefinition::new("tag")];
        let output = Generator::new(&tables).generate().expect("generation failed");
        assert_eq!(output.matches("class Tag ").count(), 2);
    }

    #[test]
    fn test_generate_rejects_empty_name() {
        let tables = vec![TableDefinition::new("")];
        let result = Generator::new(&tables).generate();
        assert!(matches!(
            result,
            Err(CodegenError::Schema(SchemaError::EmptyTableName { index: 0 }))
        ));
    }

    #[test]
    fn test_generate_rejects_invalid_name() {
        let tables = vec![TableDefinition::new("user"), TableDefinition::new("bad name")];
        let result = Generator::new(&tables).generate();
        assert!(matches!(
            result,
            Err(CodegenError::Schema(SchemaError::InvalidTableName { .. }))
        ));
    }

    #[test]
    fn test_generate_with_config() {
        let tables = sample_tables();
        let config = GeneratorConfig::new().record_id_helper("ref").export_classes(false);
        let generator = Generator::with_config(&tables, config);
        let output = generator.generate().expect("generation failed");

        assert!(!generator.config().exports_classes());
        assert!(output.contains("export const ref = "));
        assert!(output.contains("  author: ref(\"user\")"));
        assert!(output.contains("\nclass Post extends"));
    }
}

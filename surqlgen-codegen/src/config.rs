//! Generator configuration.

/// Configuration for the generated document.
///
/// The default configuration produces the canonical output: `Schema` imported
/// from `effect`, a `recordId` helper, and exported classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    schema_import: String,
    record_id_helper: String,
    export_classes: bool,
}

impl GeneratorConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            schema_import: "effect".to_string(),
            record_id_helper: "recordId".to_string(),
            export_classes: true,
        }
    }

    /// Sets the module specifier `Schema` is imported from.
    #[must_use]
    pub fn schema_import(mut self, module: impl Into<String>) -> Self {
        self.schema_import = module.into();
        self
    }

    /// Sets the name of the record identifier helper.
    #[must_use]
    pub fn record_id_helper(mut self, name: impl Into<String>) -> Self {
        self.record_id_helper = name.into();
        self
    }

    /// Sets whether generated classes are exported.
    #[must_use]
    pub fn export_classes(mut self, export: bool) -> Self {
        self.export_classes = export;
        self
    }

    /// Returns the module specifier `Schema` is imported from.
    #[must_use]
    pub fn import_module(&self) -> &str {
        &self.schema_import
    }

    /// Returns the record identifier helper name.
    #[must_use]
    pub fn helper_name(&self) -> &str {
        &self.record_id_helper
    }

    /// Returns true if generated classes are exported.
    #[must_use]
    pub const fn exports_classes(&self) -> bool {
        self.export_classes
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.import_module(), "effect");
        assert_eq!(config.helper_name(), "recordId");
        assert!(config.exports_classes());
    }

    #[test]
    fn test_config_builder() {
        let config = GeneratorConfig::new()
            .schema_import("@effect/schema")
            .record_id_helper("linkTo")
            .export_classes(false);

        assert_eq!(config.import_module(), "@effect/schema");
        assert_eq!(config.helper_name(), "linkTo");
        assert!(!config.exports_classes());
    }
}

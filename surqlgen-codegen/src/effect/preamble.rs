//! Shared document preamble: the `Schema` import and the record identifier
//! helper every generated class refers to.

use crate::config::GeneratorConfig;
use crate::effect::fields::RECORD_ID_PATTERN;

/// Generator for the document preamble.
pub struct PreambleGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> PreambleGenerator<'a> {
    /// Creates a new preamble generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates the import line, the branded `recordId` helper, and the
    /// `RecordId<T>` type alias.
    #[must_use]
    pub fn generate(&self) -> String {
        let helper = self.config.helper_name();
        let mut output = String::new();

        output.push_str(&format!(
            "import {{ Schema }} from \"{}\";\n\n",
            self.config.import_module()
        ));

        output.push_str("// Record identifier of the form \"table:id\", branded per table.\n");
        output.push_str(&format!(
            "export const {helper} = <T extends string>(table: T) =>\n"
        ));
        output.push_str("  Schema.String.pipe(\n");
        output.push_str(&format!("    Schema.pattern({RECORD_ID_PATTERN}),\n"));
        output.push_str("    Schema.brand(`RecordId<${table}>`)\n");
        output.push_str("  );\n\n");

        output.push_str(&format!(
            "export type RecordId<T extends string> = Schema.Schema.Type<ReturnType<typeof {helper}<T>>>;"
        ));

        output
    }
}

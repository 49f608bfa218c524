//! Table and field definitions.
//!
//! This module contains the normalized, surface-syntax-independent model of a
//! SurrealDB schema: tables, their fields, and record references between them.

use serde::{Deserialize, Serialize};

/// Normalized definition of one table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableDefinition {
    /// Table name as declared in the database.
    pub name: String,
    /// Table description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDefinition>,
}

impl TableDefinition {
    /// Creates a new table definition without fields.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            fields: Vec::new(),
        }
    }

    /// Sets the table description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a field and returns the table.
    #[must_use]
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.fields.push(field);
        self
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns true if the table declares its own `id` field.
    #[must_use]
    pub fn has_id_field(&self) -> bool {
        self.get_field("id").is_some()
    }
}

/// Normalized definition of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Field name.
    pub name: String,
    /// Declared type tag (case-insensitive).
    #[serde(rename = "type")]
    pub type_name: String,
    /// Whether the field may be absent.
    #[serde(default)]
    pub optional: bool,
    /// Field description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw default value expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Target of a record reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<FieldReference>,
}

impl FieldDefinition {
    /// Creates a new required field.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            optional: false,
            description: None,
            default_value: None,
            reference: None,
        }
    }

    /// Marks the field as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Sets the field description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the raw default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets the referenced table.
    #[must_use]
    pub fn with_reference(mut self, table: impl Into<String>) -> Self {
        self.reference = Some(FieldReference::new(table));
        self
    }

    /// Returns the parsed field kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        FieldKind::parse(&self.type_name)
    }

    /// Returns the referenced table name, if any.
    #[must_use]
    pub fn reference_table(&self) -> Option<&str> {
        self.reference.as_ref().map(|r| r.table.as_str())
    }
}

/// Record reference metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldReference {
    /// Referenced table name.
    pub table: String,
}

impl FieldReference {
    /// Creates a reference to the given table.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
        }
    }
}

/// Field type vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Integer number (`int`, `number`).
    Int,
    /// Floating point number.
    Float,
    /// Boolean.
    Bool,
    /// Date and time.
    Datetime,
    /// Array of strings.
    Array,
    /// Array of floats.
    ArrayFloat,
    /// Array of record links.
    ArrayRecord,
    /// Free-form object.
    Object,
    /// Single record link.
    Record,
    /// Record links pointing back at this record.
    References,
    /// Any other tag, treated as a string.
    Other,
}

impl FieldKind {
    /// Parses a field kind from its type tag, ignoring case.
    ///
    /// Unknown tags map to [`FieldKind::Other`].
    #[must_use]
    pub fn parse(tag: &str) -> Self {
        match tag.to_lowercase().as_str() {
            "int" | "number" => Self::Int,
            "float" => Self::Float,
            "bool" => Self::Bool,
            "datetime" => Self::Datetime,
            "array" => Self::Array,
            "array_float" => Self::ArrayFloat,
            "array_record" => Self::ArrayRecord,
            "object" => Self::Object,
            "record" => Self::Record,
            "references" => Self::References,
            _ => Self::Other,
        }
    }

    /// Returns true if values of this kind point at other records.
    #[must_use]
    pub const fn is_relational(&self) -> bool {
        matches!(self, Self::Record | Self::ArrayRecord | Self::References)
    }
}

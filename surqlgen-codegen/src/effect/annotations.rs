//! Annotation clause composition.
//!
//! Each generated field may carry a trailing `.annotations({ ... })` call with
//! its description and default value.

use crate::naming::single_quoted;
use regex::Regex;
use std::sync::LazyLock;
use surqlgen_schema::{FieldDefinition, FieldKind};

static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-+]?\d+(\.\d+)?$").expect("valid numeric regex"));

/// Builds the annotation clause for a field.
///
/// Returns an empty string when the field has neither a description nor a
/// default value.
#[must_use]
pub fn build_annotations(field: &FieldDefinition) -> String {
    let mut entries = Vec::with_capacity(2);

    if let Some(description) = &field.description {
        entries.push(format!("description: {}", single_quoted(description)));
    }

    if let Some(value) = &field.default_value {
        entries.push(default_entry(field.kind(), value));
    }

    if entries.is_empty() {
        String::new()
    } else {
        format!(".annotations({{ {} }})", entries.join(", "))
    }
}

/// Formats the default value entry for a field of the given kind.
///
/// Database function defaults (`time::now()`) on `datetime` fields are
/// recorded under `surrealDefault` since they have no value-level equivalent.
#[must_use]
pub fn default_entry(kind: FieldKind, value: &str) -> String {
    if is_database_function(value) {
        if kind == FieldKind::Datetime {
            format!("surrealDefault: {}", single_quoted(value))
        } else {
            format!("default: {}", single_quoted(value))
        }
    } else if is_native_literal(value) {
        format!("default: {value}")
    } else {
        format!("default: {}", single_quoted(value))
    }
}

/// Returns true if the value calls a namespaced database function.
#[must_use]
pub fn is_database_function(value: &str) -> bool {
    value.contains("::")
}

/// Returns true if the value can be emitted as-is: a quoted string, a
/// boolean, a number, or an array or object literal.
#[must_use]
pub fn is_native_literal(value: &str) -> bool {
    is_quoted(value)
        || value == "true"
        || value == "false"
        || NUMERIC_LITERAL.is_match(value)
        || value.starts_with('[')
        || value.starts_with('{')
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"')))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_annotations() {
        let field = FieldDefinition::new("name", "string");
        assert_eq!(build_annotations(&field), "");
    }

    #[test]
    fn test_description_only() {
        let field = FieldDefinition::new("name", "string").with_description("Display name");
        assert_eq!(
            build_annotations(&field),
            ".annotations({ description: 'Display name' })"
        );
    }

    #[test]
    fn test_description_is_escaped() {
        let field = FieldDefinition::new("name", "string").with_description("User's name");
        assert_eq!(
            build_annotations(&field),
            ".annotations({ description: 'User\\'s name' })"
        );
    }

    #[test]
    fn test_description_pre_escaped() {
        let field = FieldDefinition::new("name", "string").with_description("User\\'s name");
        assert_eq!(
            build_annotations(&field),
            ".annotations({ description: 'User\\'s name' })"
        );
    }

    #[test]
    fn test_plain_string_default_is_quoted() {
        let field = FieldDefinition::new("status", "string").with_default("now");
        assert_eq!(build_annotations(&field), ".annotations({ default: 'now' })");
    }

    #[test]
    fn test_datetime_function_default() {
        let field = FieldDefinition::new("created_at", "datetime").with_default("time::now()");
        let clause = build_annotations(&field);
        assert_eq!(clause, ".annotations({ surrealDefault: 'time::now()' })");
        assert!(!clause.contains("default:"));
    }

    #[test]
    fn test_non_datetime_function_default() {
        let field = FieldDefinition::new("token", "string").with_default("rand::uuid()");
        assert_eq!(
            build_annotations(&field),
            ".annotations({ default: 'rand::uuid()' })"
        );
    }

    #[test]
    fn test_function_default_is_escaped() {
        assert_eq!(
            default_entry(FieldKind::Other, "string::concat('a', 'b')"),
            "default: 'string::concat(\\'a\\', \\'b\\')'"
        );
        assert_eq!(
            default_entry(FieldKind::Datetime, "time::floor(time::now(), 1d)"),
            "surrealDefault: 'time::floor(time::now(), 1d)'"
        );
    }

    #[test]
    fn test_boolean_default_unquoted() {
        let field = FieldDefinition::new("active", "bool").with_default("true");
        assert_eq!(build_annotations(&field), ".annotations({ default: true })");

        let field = FieldDefinition::new("active", "bool").with_default("false");
        assert_eq!(build_annotations(&field), ".annotations({ default: false })");
    }

    #[test]
    fn test_numeric_default_unquoted() {
        for value in ["0", "42", "-7", "3.14", "-0.5", "+1"] {
            assert_eq!(default_entry(FieldKind::Int, value), format!("default: {value}"));
        }
    }

    #[test]
    fn test_non_numeric_default_quoted() {
        assert_eq!(default_entry(FieldKind::Int, "1e5"), "default: '1e5'");
        assert_eq!(default_entry(FieldKind::Float, "3."), "default: '3.'");
    }

    #[test]
    fn test_quoted_default_kept() {
        assert_eq!(default_entry(FieldKind::Other, "'draft'"), "default: 'draft'");
        assert_eq!(default_entry(FieldKind::Other, "\"draft\""), "default: \"draft\"");
        assert_eq!(default_entry(FieldKind::Other, "'"), "default: '\\''");
    }

    #[test]
    fn test_collection_literal_default_unquoted() {
        assert_eq!(default_entry(FieldKind::Array, "[]"), "default: []");
        assert_eq!(
            default_entry(FieldKind::Object, "{ theme: 'dark' }"),
            "default: { theme: 'dark' }"
        );
    }

    #[test]
    fn test_description_and_default() {
        let field = FieldDefinition::new("views", "int")
            .with_description("View count")
            .with_default("0");
        assert_eq!(
            build_annotations(&field),
            ".annotations({ description: 'View count', default: 0 })"
        );
    }
}

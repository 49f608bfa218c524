//! Identifier and string literal helpers.

use surqlgen_schema::is_identifier;

/// Converts a table name into a class name by uppercasing its first character.
///
/// The rest of the name is left unchanged and no character-set validation is
/// performed; table names are checked by `surqlgen_schema::validate_tables`.
#[must_use]
pub fn format_class_name(table_name: &str) -> String {
    let mut chars = table_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Escapes single quotes for embedding in a single-quoted literal.
///
/// Already escaped quotes (`\'`) are unescaped first, so escaping an escaped
/// string yields the same string.
#[must_use]
pub fn escape_single_quotes(text: &str) -> String {
    text.replace("\\'", "'").replace('\'', "\\'")
}

/// Wraps text in single quotes, escaping embedded quotes and line breaks.
#[must_use]
pub fn single_quoted(text: &str) -> String {
    let escaped = escape_single_quotes(text)
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("'{escaped}'")
}

/// Wraps text in double quotes, escaping backslashes and double quotes.
#[must_use]
pub fn double_quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Returns the object key for a property, quoting names that are not
/// identifiers.
#[must_use]
pub fn property_key(name: &str) -> String {
    if is_identifier(name) {
        name.to_string()
    } else {
        double_quoted(name)
    }
}

/// Formats text as a `/** ... */` block, one ` * ` line per input line.
///
/// `*/` inside the text is written as `*\/` so the block cannot close early.
#[must_use]
pub fn doc_comment(text: &str) -> String {
    let mut output = String::from("/**\n");
    for line in escape_single_quotes(text).replace("*/", "*\\/").lines() {
        if line.is_empty() {
            output.push_str(" *\n");
        } else {
            output.push_str(&format!(" * {line}\n"));
        }
    }
    output.push_str(" */\n");
    output
}

//! Recursive sanitizer for generated summaries
//!
//! Runs before validation: it rewrites leaked literals the generator is known
//! to echo (the real company name, raw source filenames in citation fields)
//! so that a summary that is otherwise sound does not burn a retry attempt.

use serde_json::Value;

/// Replacement for the real company name.
const CODE_NAME: &str = "Project X";

/// Replacement for raw source references in citation display fields.
const SOURCE_PLACEHOLDER: &str = "Internal Doc";

/// Key whose string values are source-display fields.
const SOURCE_DISPLAY_KEY: &str = "source_display";

/// Walk the summary tree, scrubbing string values.
///
/// Objects and arrays recurse; numbers, booleans and nulls pass through. A
/// string under a `source_display` key that contains a path separator, a dot,
/// or the real name is replaced wholesale; every other string has literal
/// occurrences of the real name (with and without internal spaces) replaced
/// with the code name.
pub fn sanitize(value: Value, forbidden_name: &str) -> Value {
    transform(value, forbidden_name, None)
}

fn transform(value: Value, forbidden_name: &str, key: Option<&str>) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| {
                    let transformed = transform(v, forbidden_name, Some(k.as_str()));
                    (k, transformed)
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| transform(item, forbidden_name, None))
                .collect(),
        ),
        Value::String(s) => Value::String(sanitize_string(s, forbidden_name, key)),
        other => other,
    }
}

fn sanitize_string(s: String, forbidden_name: &str, key: Option<&str>) -> String {
    if key == Some(SOURCE_DISPLAY_KEY) && looks_like_raw_source(&s, forbidden_name) {
        return SOURCE_PLACEHOLDER.to_string();
    }

    let name = forbidden_name.trim();
    if name.is_empty() {
        return s;
    }
    let squashed: String = name.split_whitespace().collect::<Vec<_>>().join("");
    let mut clean = s.replace(name, CODE_NAME);
    if squashed != name {
        clean = clean.replace(&squashed, CODE_NAME);
    }
    clean
}

fn looks_like_raw_source(s: &str, forbidden_name: &str) -> bool {
    if s.contains('/') || s.contains('\\') || s.contains('.') {
        return true;
    }
    let name = forbidden_name.trim().to_lowercase();
    !name.is_empty() && s.to_lowercase().contains(&name)
}

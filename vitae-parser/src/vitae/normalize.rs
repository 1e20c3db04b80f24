//! List-or-string field normalization
//!
//! Several fields (skills, technical environment, applied methods) may be written either as a
//! comma separated string or as a YAML list. [`normalize_items`] is the single place where
//! both styles collapse into one delimited string.

use serde_yaml::Value;

/// Delimiter used when the caller has no preference.
pub const DEFAULT_DELIMITER: &str = ", ";

/// Collapse a string / sequence / absent value into one string.
///
/// Falsy values (absent, `null`, `false`, `0`, `""`) become `""`. Strings are returned
/// unchanged, sequences are joined with `delimiter`, anything else uses its string form.
pub fn normalize_items(value: Option<&Value>, delimiter: &str) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if is_falsy(value) {
        return String::new();
    }
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(delimiter),
        other => display_value(other),
    }
}

/// Whether a value counts as "nothing to show".
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => false,
    }
}

/// String form of any YAML value; collections render as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Tagged(tagged) => display_value(&tagged.value),
        collection => serde_json::to_string(collection).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[rstest]
    #[case("Rust, Go, SQL", ", ", "Rust, Go, SQL")]
    #[case("[Rust, Go, SQL]", ", ", "Rust, Go, SQL")]
    #[case("[PCA, t-SNE]", ";;", "PCA;;t-SNE")]
    #[case("[1, two, true]", " | ", "1 | two | true")]
    #[case("42", ", ", "42")]
    #[case("true", ", ", "true")]
    #[case("{a: 1}", ", ", r#"{"a":1}"#)]
    fn normalizes(#[case] src: &str, #[case] delimiter: &str, #[case] expected: &str) {
        assert_eq!(normalize_items(Some(&yaml(src)), delimiter), expected);
    }

    #[rstest]
    #[case("null")]
    #[case("false")]
    #[case("0")]
    #[case("''")]
    fn falsy_values_are_empty(#[case] src: &str) {
        assert_eq!(normalize_items(Some(&yaml(src)), DEFAULT_DELIMITER), "");
    }

    #[test]
    fn absent_is_empty() {
        assert_eq!(normalize_items(None, DEFAULT_DELIMITER), "");
    }

    #[test]
    fn empty_sequence_is_empty() {
        assert_eq!(normalize_items(Some(&yaml("[]")), DEFAULT_DELIMITER), "");
    }
}

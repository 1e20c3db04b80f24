//! Declared-order validation
//!
//!     When `_meta.sections_order` is present it is the sole render order: sections are emitted
//!     in that order, names that do not exist are reported in one aggregated error, and content
//!     sections the order does not mention are reported in one aggregated warning and dropped.
//!     The `_meta` entry itself always survives, appended after the ordered sections.
//!
//!     Validation never fails. Diagnostics are advisory and never block rendering.

use super::document::{is_meta_key, Document, META_KEY};
use serde::Serialize;
use std::fmt;

pub const NO_ORDER_MESSAGE: &str =
    "No sections_order defined in _meta. Sections will render in YAML order.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// A non-fatal, severity-tagged validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// A document after order validation, with the Diagnostics it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl Validated {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }
}

/// Check `document` against its declared order and reorder it.
pub fn validate_and_reorder(document: Document) -> Validated {
    let Some(order) = document.sections_order().map(<[String]>::to_vec) else {
        return Validated {
            document,
            diagnostics: vec![Diagnostic::info(NO_ORDER_MESSAGE)],
        };
    };

    let missing: Vec<&str> = order
        .iter()
        .map(String::as_str)
        .filter(|key| !document.contains_key(key))
        .collect();
    let unordered: Vec<String> = document
        .content_keys()
        .filter(|key| !order.iter().any(|declared| declared == key))
        .map(str::to_string)
        .collect();

    let mut diagnostics = Vec::new();
    if !missing.is_empty() {
        for key in &missing {
            log::warn!("section \"{key}\" is listed in sections_order but not defined");
        }
        diagnostics.push(Diagnostic::error(format!(
            "Missing sections: {}",
            quoted_list(missing.iter().copied())
        )));
    }
    if !unordered.is_empty() {
        for key in &unordered {
            log::warn!("section \"{key}\" is not listed in sections_order and will not render");
        }
        diagnostics.push(Diagnostic::warning(format!(
            "Unordered sections: {}",
            quoted_list(unordered.iter().map(String::as_str))
        )));
    }

    let (mut entries, meta) = document.into_entries();
    let mut reordered = Vec::with_capacity(order.len() + 1);
    for key in &order {
        // `_meta` and other metadata keys are never content, even when listed
        if is_meta_key(key) {
            continue;
        }
        if let Some(index) = entries.iter().position(|(candidate, _)| candidate == key) {
            reordered.push(entries.swap_remove(index));
        }
    }
    if let Some(index) = entries.iter().position(|(key, _)| key == META_KEY) {
        reordered.push(entries.swap_remove(index));
    }

    Validated {
        document: Document::from_parts(reordered, meta),
        diagnostics,
    }
}

fn quoted_list<'a>(keys: impl Iterator<Item = &'a str>) -> String {
    keys.map(|key| format!("\"{key}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_yaml::Value;

    fn parse(src: &str) -> Document {
        Document::from_value(serde_yaml::from_str(src).unwrap()).unwrap()
    }

    #[test]
    fn no_order_keeps_document_and_reports_info() {
        let doc = parse("b: {}\na: {}\n");
        let validated = validate_and_reorder(doc.clone());
        assert_eq!(validated.document, doc);
        assert_eq!(validated.diagnostics, vec![Diagnostic::info(NO_ORDER_MESSAGE)]);
        assert!(!validated.has_errors());
    }

    #[test]
    fn missing_and_unordered_are_aggregated() {
        let doc = parse(
            "_meta:\n  sections_order: [contact, work]\ncontact: {_type: contact}\neducation: {_type: education}\n",
        );
        let validated = validate_and_reorder(doc);
        assert_eq!(
            validated.diagnostics,
            vec![
                Diagnostic::error("Missing sections: \"work\""),
                Diagnostic::warning("Unordered sections: \"education\""),
            ]
        );
        assert_eq!(
            validated.document.keys().collect::<Vec<_>>(),
            vec!["contact", "_meta"]
        );
        assert!(validated.has_errors());
    }

    #[test]
    fn several_missing_keys_share_one_diagnostic() {
        let doc = parse("_meta:\n  sections_order: [x, y, z]\n");
        let validated = validate_and_reorder(doc);
        assert_eq!(
            validated.diagnostics,
            vec![Diagnostic::error("Missing sections: \"x\", \"y\", \"z\"")]
        );
        assert_eq!(validated.document.keys().collect::<Vec<_>>(), vec!["_meta"]);
    }

    #[test]
    fn follows_declared_order() {
        let doc = parse("_meta:\n  sections_order: [c, a, b]\na: 1\nb: 2\nc: 3\n");
        let validated = validate_and_reorder(doc);
        assert!(validated.diagnostics.is_empty());
        assert_eq!(
            validated.document.keys().collect::<Vec<_>>(),
            vec!["c", "a", "b", "_meta"]
        );
        assert!(validated.document.meta().is_some());
    }

    #[test]
    fn other_metadata_entries_are_not_unordered() {
        let doc = parse("_meta:\n  sections_order: [a]\n_notes: draft\na: 1\n");
        let validated = validate_and_reorder(doc);
        assert!(validated.diagnostics.is_empty());
    }

    #[test]
    fn diagnostics_serialize_lowercase() {
        let json = serde_json::to_string(&Diagnostic::warning("w")).unwrap();
        assert_eq!(json, r#"{"severity":"warning","message":"w"}"#);
    }

    proptest! {
        #[test]
        fn output_is_order_intersect_keys(
            order in proptest::collection::vec("[a-f]", 0..6),
            keys in proptest::collection::btree_set("[a-h]", 0..8),
        ) {
            let mut order_dedup: Vec<String> = Vec::new();
            for key in order {
                if !order_dedup.contains(&key) {
                    order_dedup.push(key);
                }
            }
            let meta: Value = serde_yaml::from_str(&format!(
                "sections_order: [{}]",
                order_dedup.join(", ")
            )).unwrap();
            let mut entries = vec![("_meta".to_string(), meta)];
            entries.extend(keys.iter().map(|key| (key.clone(), Value::Null)));
            let doc = Document::from_entries(entries).unwrap();

            let validated = validate_and_reorder(doc);
            let rendered: Vec<&str> = validated.document.content_keys().collect();
            let expected: Vec<&str> = order_dedup
                .iter()
                .map(String::as_str)
                .filter(|key| keys.contains(*key))
                .collect();
            prop_assert_eq!(&rendered, &expected);

            let errors = validated
                .diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Error)
                .count();
            let any_missing = order_dedup.iter().any(|key| !keys.contains(key));
            prop_assert_eq!(errors, usize::from(any_missing));

            let warnings = validated
                .diagnostics
                .iter()
                .filter(|d| d.severity == Severity::Warning)
                .count();
            let any_unordered = keys.iter().any(|key| !order_dedup.contains(key));
            prop_assert_eq!(warnings, usize::from(any_unordered));
        }
    }
}

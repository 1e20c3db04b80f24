//! Loading fixture documents end to end: shim, YAML, validation.

use std::path::PathBuf;
use vitae_parser::vitae::{DocumentLoader, LoaderError, Section, Severity};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn declared_order_drops_unordered_and_reports_missing() {
    let validated = DocumentLoader::from_path(fixture("ordered.yml"))
        .unwrap()
        .validate()
        .unwrap();

    let messages: Vec<(Severity, &str)> = validated
        .diagnostics
        .iter()
        .map(|d| (d.severity, d.message.as_str()))
        .collect();
    assert_eq!(
        messages,
        vec![
            (Severity::Error, "Missing sections: \"work\""),
            (Severity::Warning, "Unordered sections: \"education\""),
        ]
    );
    assert_eq!(
        validated.document.keys().collect::<Vec<_>>(),
        vec!["contact", "_meta"]
    );

    let meta = validated.document.meta().unwrap();
    assert_eq!(meta.display().font_scheme, Some(2));
    assert_eq!(meta.display().margin.as_deref(), Some("0.4in"));
    assert_eq!(validated.document.page_title().as_deref(), Some("Jane Doe Resume"));
}

#[test]
fn without_order_sections_keep_declaration_order() {
    let validated = DocumentLoader::from_path(fixture("declaration_order.yml"))
        .unwrap()
        .validate()
        .unwrap();

    assert_eq!(validated.diagnostics.len(), 1);
    assert_eq!(validated.diagnostics[0].severity, Severity::Info);
    assert_eq!(
        validated.document.keys().collect::<Vec<_>>(),
        vec!["summary", "work", "skills"]
    );
}

#[test]
fn bold_list_items_survive_the_shim() {
    let doc = DocumentLoader::from_path(fixture("declaration_order.yml"))
        .unwrap()
        .parse()
        .unwrap();

    let work = Section::from_value(doc.get("work").unwrap()).unwrap();
    assert_eq!(work.declared_type.as_deref(), Some("work"));
    let items = work.content["items"].as_sequence().unwrap();
    let responsibilities = items[0]["responsibilities"].as_sequence().unwrap();
    assert_eq!(responsibilities[0].as_str(), Some("**Led** the storage team"));
}

#[test]
fn malformed_meta_is_a_parse_failure() {
    let err = DocumentLoader::from_path(fixture("malformed_meta.yml"))
        .unwrap()
        .parse()
        .unwrap_err();
    assert!(matches!(err, LoaderError::Transform(_)));
    assert!(err.to_string().contains("_meta"));
}

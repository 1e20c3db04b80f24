//! Section extraction
//!
//!     A section is a YAML mapping mixing reserved keys (prefixed with `_`) and user content.
//!     Renderers only ever see the content half; the reserved half is lifted into typed fields:
//!
//!     | key       | meaning                                  |
//!     |-----------|------------------------------------------|
//!     | `_type`   | declared section type (template to use)  |
//!     | `_title`  | display title                            |
//!     | `_labels` | label overrides, string -> string        |
//!     | `_style`  | per-section style overrides              |

use super::document::{is_meta_key, META_PREFIX};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

const TYPE_KEY: &str = "_type";
const TITLE_KEY: &str = "_title";
const LABELS_KEY: &str = "_labels";
const STYLE_KEY: &str = "_style";

/// Label overrides for a section.
pub type Labels = BTreeMap<String, String>;

/// Copy of `section` without any metadata key.
pub fn extract_content(section: &Mapping) -> Mapping {
    section
        .iter()
        .filter(|(key, _)| !matches!(key, Value::String(k) if k.starts_with(META_PREFIX)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Per-section style overrides declared with `_style`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionStyle {
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub border_left: Option<String>,
    pub padding: Option<String>,
    pub margin: Option<String>,
    pub font_size: Option<String>,
    pub font_family: Option<String>,
    /// Arbitrary extra declarations, property -> value.
    pub extra_css: BTreeMap<String, String>,
}

impl SectionStyle {
    /// Declarations in a stable order, properties in kebab-case.
    pub fn declarations(&self) -> Vec<(String, String)> {
        let named = [
            ("background-color", &self.background_color),
            ("color", &self.text_color),
            ("border-left", &self.border_left),
            ("padding", &self.padding),
            ("margin", &self.margin),
            ("font-size", &self.font_size),
            ("font-family", &self.font_family),
        ];
        let mut decls: Vec<(String, String)> = named
            .into_iter()
            .filter_map(|(prop, value)| value.as_ref().map(|v| (prop.to_string(), v.clone())))
            .collect();
        decls.extend(
            self.extra_css
                .iter()
                .map(|(prop, value)| (kebab_case(prop), value.clone())),
        );
        decls
    }

    pub fn is_empty(&self) -> bool {
        self.declarations().is_empty()
    }
}

fn kebab_case(prop: &str) -> String {
    let mut out = String::with_capacity(prop.len() + 4);
    for ch in prop.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}

/// A section split into its reserved parts and its content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub declared_type: Option<String>,
    pub title: Option<String>,
    pub labels: Labels,
    pub style: Option<SectionStyle>,
    pub content: Mapping,
}

impl Section {
    /// Returns `None` for anything that is not a mapping.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Mapping(mapping) => Some(Self::from_mapping(mapping)),
            _ => None,
        }
    }

    pub fn from_mapping(mapping: &Mapping) -> Self {
        let declared_type = mapping
            .get(TYPE_KEY)
            .and_then(scalar_to_string)
            .filter(|t| !t.trim().is_empty());
        let title = mapping.get(TITLE_KEY).and_then(scalar_to_string);
        let labels = mapping.get(LABELS_KEY).map(labels_from).unwrap_or_default();
        let style = mapping
            .get(STYLE_KEY)
            .and_then(|value| serde_yaml::from_value::<SectionStyle>(value.clone()).ok())
            .filter(|style| !style.is_empty());

        Section {
            declared_type,
            title,
            labels,
            style,
            content: extract_content(mapping),
        }
    }

    /// Label override for `key`, or `default`.
    pub fn label<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.labels.get(key).map(String::as_str).unwrap_or(default)
    }
}

fn labels_from(value: &Value) -> Labels {
    let Value::Mapping(mapping) = value else {
        return Labels::new();
    };
    mapping
        .iter()
        .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
        .filter(|(key, _)| !is_meta_key(key))
        .collect()
}

/// String form of a scalar; `None` for null and collections.
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_to_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

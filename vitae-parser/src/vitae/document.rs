//! Document model
//!
//!     A vitae document is an ordered mapping of section key -> YAML value. Top-level keys that
//!     start with [`META_PREFIX`] are metadata entries and never content; the reserved
//!     [`META_KEY`] entry carries the declared section order, the save-name hint and display
//!     preferences.
//!
//!     Declaration order matters: without a declared order, sections render in the order they
//!     appear in the source. Entries are therefore kept in a `Vec` and key uniqueness is enforced
//!     on construction.
//!
//!     A document is rebuilt from scratch on every parse and never mutated across render passes.

use serde::ser::SerializeMap;
use super::extraction::scalar_to_string;
use serde::{Deserialize, Serialize, Serializer};
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Prefix marking a key as metadata (document level and section level).
pub const META_PREFIX: char = '_';

/// Reserved top-level entry holding document metadata.
pub const META_KEY: &str = "_meta";

/// Whether `key` names a metadata entry rather than user content.
pub fn is_meta_key(key: &str) -> bool {
    key.starts_with(META_PREFIX)
}

/// Structural problems that make a parsed YAML tree unusable as a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("document root must be a mapping, found {0}")]
    RootNotMapping(&'static str),

    #[error("top-level keys must be scalars, found {0}")]
    UnsupportedKey(&'static str),

    #[error("duplicate section key \"{0}\"")]
    DuplicateKey(String),

    #[error("invalid _meta entry: {0}")]
    InvalidMeta(String),
}

/// Display preferences a document may request for itself.
///
/// Anything left unset falls back to the configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub font_scheme: Option<u8>,
    pub margin: Option<String>,
    pub font_face: Option<String>,
}

/// Parsed `_meta` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    pub sections_order: Option<Vec<String>>,
    pub save_filename: Option<String>,
    pub font_scheme: Option<u8>,
    pub margin: Option<String>,
    pub font_face: Option<String>,
}

impl Meta {
    /// Read a `_meta` value.
    ///
    /// Only the shape of `sections_order` is structural. Hints with an unusable value are
    /// dropped with a warning, and unknown keys are ignored.
    fn from_value(value: &Value) -> Result<Option<Self>, DocumentError> {
        let mapping = match value {
            Value::Null => return Ok(None),
            Value::Mapping(mapping) => mapping,
            Value::Tagged(tagged) => return Self::from_value(&tagged.value),
            other => {
                return Err(DocumentError::InvalidMeta(format!(
                    "expected a mapping, found {}",
                    value_kind(other)
                )))
            }
        };
        let field = |name: &str| mapping.get(name).filter(|value| !value.is_null());

        let sections_order = field("sections_order")
            .map(|value| match value {
                Value::Sequence(entries) => entries
                    .iter()
                    .map(|entry| {
                        scalar_to_string(entry).ok_or_else(|| {
                            DocumentError::InvalidMeta(format!(
                                "sections_order entries must be section keys, found {}",
                                value_kind(entry)
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>, _>>(),
                other => Err(DocumentError::InvalidMeta(format!(
                    "sections_order must be a list, found {}",
                    value_kind(other)
                ))),
            })
            .transpose()?;

        Ok(Some(Self {
            sections_order,
            save_filename: field("save_filename").and_then(|value| hint("save_filename", value)),
            font_scheme: field("font_scheme").and_then(font_scheme),
            margin: field("margin").and_then(|value| hint("margin", value)),
            font_face: field("font_face").and_then(|value| hint("font_face", value)),
        }))
    }

    pub fn display(&self) -> DisplayPreferences {
        DisplayPreferences {
            font_scheme: self.font_scheme,
            margin: self.margin.clone(),
            font_face: self.font_face.clone(),
        }
    }

    /// Human title derived from `save_filename`.
    ///
    /// `"my-new_resume"` becomes `"My New Resume"`.
    pub fn page_title(&self) -> Option<String> {
        let filename = self.save_filename.as_deref()?.trim();
        if filename.is_empty() {
            return None;
        }
        let title = filename
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ");
        Some(title)
    }
}

fn hint(name: &str, value: &Value) -> Option<String> {
    let text = scalar_to_string(value);
    if text.is_none() {
        log::warn!("ignoring _meta.{name}: expected text, found {}", value_kind(value));
    }
    text
}

fn font_scheme(value: &Value) -> Option<u8> {
    let scheme = scalar_to_string(value).and_then(|text| text.trim().parse::<u8>().ok());
    if scheme.is_none() {
        log::warn!("ignoring _meta.font_scheme: {value:?} is not a scheme number");
    }
    scheme
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// An ordered, key-unique mapping of top-level entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: Vec<(String, Value)>,
    meta: Option<Meta>,
}

impl Document {
    /// An empty document (what an empty source parses to).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a parsed YAML tree.
    ///
    /// `null` (an empty source) yields an empty document; any other non-mapping root is an error.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::Mapping(mapping) => Self::from_mapping(mapping),
            Value::Tagged(tagged) => Self::from_value(tagged.value),
            other => Err(DocumentError::RootNotMapping(value_kind(&other))),
        }
    }

    pub fn from_mapping(mapping: Mapping) -> Result<Self, DocumentError> {
        let mut entries = Vec::with_capacity(mapping.len());
        for (key, value) in mapping {
            entries.push((key_to_string(&key)?, value));
        }
        Self::from_entries(entries)
    }

    /// Build a document from already-keyed entries, preserving their order.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut doc = Self::new();
        for (key, value) in entries {
            let key = key.into();
            if doc.contains_key(&key) {
                return Err(DocumentError::DuplicateKey(key));
            }
            if key == META_KEY {
                doc.meta = Meta::from_value(&value)?;
            }
            doc.entries.push((key, value));
        }
        Ok(doc)
    }

    /// Entries in document order, metadata included.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Keys of user content entries (everything not prefixed as metadata).
    pub fn content_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().filter(|key| !is_meta_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    /// The declared section order, if `_meta.sections_order` is present.
    pub fn sections_order(&self) -> Option<&[String]> {
        self.meta.as_ref()?.sections_order.as_deref()
    }

    pub fn page_title(&self) -> Option<String> {
        self.meta.as_ref()?.page_title()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert back into a YAML mapping (document order).
    pub fn to_value(&self) -> Value {
        let mapping: Mapping = self
            .entries
            .iter()
            .map(|(key, value)| (Value::String(key.clone()), value.clone()))
            .collect();
        Value::Mapping(mapping)
    }

    pub(crate) fn into_entries(self) -> (Vec<(String, Value)>, Option<Meta>) {
        (self.entries, self.meta)
    }

    pub(crate) fn from_parts(entries: Vec<(String, Value)>, meta: Option<Meta>) -> Self {
        Self { entries, meta }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

fn key_to_string(key: &Value) -> Result<String, DocumentError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(DocumentError::UnsupportedKey(value_kind(other))),
    }
}

/// Short YAML type name, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

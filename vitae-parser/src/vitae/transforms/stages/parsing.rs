//! YAML parsing stage: String -> Document

use crate::vitae::document::Document;
use crate::vitae::transforms::{Runnable, TransformError};
use serde_yaml::Value;

/// Parses source text as YAML and builds a [`Document`] from it.
///
/// Blank (or comment-only) sources yield an empty document. Malformed YAML, a non-mapping
/// root and a malformed `_meta` entry are all stage failures.
pub struct ParseYaml;

impl ParseYaml {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ParseYaml {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, Document> for ParseYaml {
    fn run(&self, input: String) -> Result<Document, TransformError> {
        if is_blank(&input) {
            return Ok(Document::new());
        }
        let value: Value =
            serde_yaml::from_str(&input).map_err(|err| TransformError::stage("yaml", err))?;
        Document::from_value(value).map_err(|err| TransformError::stage("document", err))
    }
}

fn is_blank(source: &str) -> bool {
    source
        .lines()
        .map(str::trim)
        .all(|line| line.is_empty() || line.starts_with('#') || line == "---")
}

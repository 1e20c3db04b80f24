//! Document loading utilities
//!
//! `DocumentLoader` loads source text from a file or a string and runs transforms on it. The
//! CLI, the render session and the tests all go through it.
//!
//! ```rust,ignore
//! use vitae_parser::vitae::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("resume.yml")?.parse()?;
//! let validated = DocumentLoader::from_string(source).validate()?;
//! ```

use crate::vitae::document::Document;
use crate::vitae::transforms::standard::{COMPAT_SHIM, STRING_TO_DOCUMENT, STRING_TO_VALIDATED};
use crate::vitae::transforms::{Transform, TransformError};
use crate::vitae::validation::Validated;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading documents
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Transform(#[from] TransformError),
}

/// Document loader with transform shortcuts
#[derive(Debug, Clone)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Shim + YAML parse. Shortcut for `.with(&STRING_TO_DOCUMENT)`.
    pub fn parse(&self) -> Result<Document, LoaderError> {
        self.with(&STRING_TO_DOCUMENT)
    }

    /// Parse and validate against the declared order.
    pub fn validate(&self) -> Result<Validated, LoaderError> {
        self.with(&STRING_TO_VALIDATED)
    }

    /// Source text after the compatibility shim.
    pub fn shimmed(&self) -> Result<String, LoaderError> {
        self.with(&COMPAT_SHIM)
    }

    pub fn source(&self) -> String {
        self.source.clone()
    }

    pub fn source_ref(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("summary: {}\n");
        assert_eq!(loader.source(), "summary: {}\n");
        assert_eq!(loader.source_ref(), "summary: {}\n");
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "summary:\n  _type: summary\n  content: hi").unwrap();

        let doc = DocumentLoader::from_path(file.path()).unwrap().parse().unwrap();
        assert!(doc.contains_key("summary"));
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = DocumentLoader::from_path("nonexistent.yml");
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let err = DocumentLoader::from_string("a: [1, 2\n").parse().unwrap_err();
        assert!(matches!(err, LoaderError::Transform(_)));
        assert!(err.to_string().starts_with("Parse error: Stage 'yaml' failed"));
    }

    #[test]
    fn test_validate() {
        let validated = DocumentLoader::from_string("a: {}\n").validate().unwrap();
        assert_eq!(validated.diagnostics.len(), 1);
    }

    #[test]
    fn test_shimmed() {
        let loader = DocumentLoader::from_string("x:\n  - **b**\n");
        assert_eq!(loader.shimmed().unwrap(), "x:\n  - \"**b**\"\n");
    }

    #[test]
    fn test_loader_is_reusable() {
        let loader = DocumentLoader::from_string("a: 1\n");
        let first = loader.parse().unwrap();
        let second = loader.parse().unwrap();
        assert_eq!(first, second);
    }
}

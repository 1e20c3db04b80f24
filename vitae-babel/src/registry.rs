//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name. The CLI lists them with `vitae formats` and
//! picks one with `--to`.

use crate::error::FormatError;
use crate::format::Format;
use crate::session::RenderPass;
use std::collections::HashMap;

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.serialize(&pass, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format with the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Find the format owning a file extension (`"htm"`, `".json"`).
    pub fn for_extension(&self, extension: &str) -> Option<&dyn Format> {
        let extension = extension.trim_start_matches('.');
        let mut names = self.list_formats();
        // `html` before `fragment` for the shared extension
        names.sort_by_key(|name| name != "html");
        names
            .into_iter()
            .filter_map(|name| self.formats.get(&name))
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.as_ref())
    }

    /// Serialize a render pass using the named format
    pub fn serialize(&self, pass: &RenderPass, format: &str) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{}' does not support serialization",
                format
            )));
        }
        fmt.serialize(pass)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFormat);
        registry.register(crate::formats::fragment::FragmentFormat);
        registry.register(crate::formats::json::JsonFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::RenderSession;

    struct TestFormat;
    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn description(&self) -> &str {
            "Test format"
        }
        fn file_extensions(&self) -> &[&str] {
            &["tst"]
        }
        fn supports_serialization(&self) -> bool {
            true
        }
        fn serialize(&self, _pass: &RenderPass) -> Result<String, FormatError> {
            Ok("test output".to_string())
        }
    }

    struct ReadOnly;
    impl Format for ReadOnly {
        fn name(&self) -> &str {
            "readonly"
        }
    }

    fn sample_pass() -> RenderPass {
        RenderSession::new()
            .render("summary:\n  _type: summary\n  content: Hi\n")
            .unwrap()
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            _ => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let result = registry.serialize(&sample_pass(), "test");
        assert_eq!(result.unwrap(), "test output");
    }

    #[test]
    fn test_registry_serialize_not_supported() {
        let mut registry = FormatRegistry::new();
        registry.register(ReadOnly);

        let result = registry.serialize(&sample_pass(), "readonly");
        assert!(matches!(result, Err(FormatError::NotSupported(_))));
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_registry_defaults() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.list_formats(), vec!["fragment", "html", "json"]);
    }

    #[test]
    fn test_for_extension() {
        let registry = FormatRegistry::with_defaults();
        assert_eq!(registry.for_extension("html").map(|f| f.name()), Some("html"));
        assert_eq!(registry.for_extension(".json").map(|f| f.name()), Some("json"));
        assert!(registry.for_extension("pdf").is_none());
    }
}

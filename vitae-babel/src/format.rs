//! Format trait definition
//!
//! A format turns a finished [`RenderPass`] into text. Formats are output-only: the source side
//! is always YAML and goes through `DocumentLoader`.

use crate::error::FormatError;
use crate::session::RenderPass;

/// Trait for output formats
///
/// ```ignore
/// struct Plain;
///
/// impl Format for Plain {
///     fn name(&self) -> &str { "plain" }
///     fn file_extensions(&self) -> &[&str] { &["txt"] }
///     fn supports_serialization(&self) -> bool { true }
///     fn serialize(&self, pass: &RenderPass) -> Result<String, FormatError> {
///         Ok(pass.markup().to_string())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g. "html", "json")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions, preferred one first.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    /// Serialize a render pass.
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _pass: &RenderPass) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}

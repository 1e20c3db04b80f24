//! Fragment format: the engine markup with no page around it.
//!
//! Useful for embedding a document in another page or for diffing renders.

use crate::error::FormatError;
use crate::format::Format;
use crate::session::RenderPass;

#[derive(Debug, Default)]
pub struct FragmentFormat;

impl Format for FragmentFormat {
    fn name(&self) -> &str {
        "fragment"
    }

    fn description(&self) -> &str {
        "Section markup only, no page shell"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, pass: &RenderPass) -> Result<String, FormatError> {
        let mut out = pass.markup().to_string();
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

//! JSON format
//!
//! Exports the parsed document (in render order, `_meta` included) together with the
//! diagnostics of the pass:
//!
//! ```json
//! {
//!   "title": "Jane Doe Resume",
//!   "diagnostics": [{ "severity": "warning", "message": "..." }],
//!   "document": { "contact": { ... }, "_meta": { ... } }
//! }
//! ```

use crate::error::FormatError;
use crate::format::Format;
use crate::session::RenderPass;
use serde::Serialize;
use vitae_parser::vitae::{Diagnostic, Document};

#[derive(Serialize)]
struct JsonExport<'a> {
    title: &'a str,
    diagnostics: &'a [Diagnostic],
    document: &'a Document,
}

#[derive(Debug, Default)]
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Parsed document and diagnostics as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, pass: &RenderPass) -> Result<String, FormatError> {
        let export = JsonExport {
            title: &pass.page.title,
            diagnostics: &pass.diagnostics,
            document: &pass.document,
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

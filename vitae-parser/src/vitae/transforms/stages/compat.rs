//! Compatibility shim run before YAML parsing
//!
//! Authors like to start list items with bold markup (`- **Led** the migration`). A plain
//! scalar cannot begin with `*` in YAML (it introduces an alias), so such lines are rewritten
//! into double-quoted scalars before the parser sees them.

use crate::vitae::transforms::{Runnable, TransformError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD_LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^([ \t]*- )(\*\*[^\r\n]*)").expect("valid regex"));

/// Quote every list-item line whose value starts with `**`.
///
/// Backslashes and double quotes inside the value are escaped so the result is always a valid
/// double-quoted scalar. Lines that are already quoted are left alone.
pub fn quote_bold_list_items(text: &str) -> String {
    BOLD_LIST_ITEM
        .replace_all(text, |caps: &Captures| {
            let value = caps[2].trim_end();
            let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
            format!("{}\"{}\"", &caps[1], escaped)
        })
        .into_owned()
}

/// Stage wrapper around [`quote_bold_list_items`]: String -> String.
pub struct QuoteBoldListItems;

impl QuoteBoldListItems {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuoteBoldListItems {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, String> for QuoteBoldListItems {
    fn run(&self, input: String) -> Result<String, TransformError> {
        Ok(quote_bold_list_items(&input))
    }
}

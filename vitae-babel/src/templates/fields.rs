//! Field access shared by the renderers.

use super::{RenderContext, RenderError};
use serde_yaml::{Mapping, Value};
use vitae_parser::vitae::document::value_kind;
use vitae_parser::vitae::{escape_html, scalar_to_string};

/// Text of a scalar field. Absent, `null` and empty values are `None`; collections are an error.
pub(crate) fn text(content: &Mapping, field: &str) -> Result<Option<String>, RenderError> {
    match content.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match scalar_to_string(value) {
            Some(text) if text.is_empty() => Ok(None),
            Some(text) => Ok(Some(text)),
            None => Err(invalid(field, "text", value)),
        },
    }
}

/// Escaped field text, `""` when absent.
pub(crate) fn escaped(content: &Mapping, field: &str) -> Result<String, RenderError> {
    Ok(text(content, field)?
        .map(|text| escape_html(&text))
        .unwrap_or_default())
}

/// Formatted field text, `""` when absent.
pub(crate) fn formatted(
    content: &Mapping,
    field: &str,
    ctx: &RenderContext<'_>,
) -> Result<String, RenderError> {
    Ok(text(content, field)?
        .map(|text| ctx.format(&text))
        .unwrap_or_default())
}

/// The `items` list, if present and a sequence.
pub(crate) fn items(content: &Mapping) -> Option<&Vec<Value>> {
    content.get("items").and_then(Value::as_sequence)
}

pub(crate) fn item_mapping(index: usize, item: &Value) -> Result<&Mapping, RenderError> {
    item.as_mapping().ok_or(RenderError::ItemNotMapping {
        index,
        found: value_kind(item),
    })
}

pub(crate) fn invalid(field: &str, expected: &'static str, found: &Value) -> RenderError {
    RenderError::InvalidField {
        field: field.to_string(),
        expected,
        found: value_kind(found),
    }
}

/// Placeholder for list sections without an `items` list.
pub(crate) fn no_items(ctx: &RenderContext<'_>) -> String {
    format!(
        r#"<div class="section"><h2>{}</h2><p>No items</p></div>"#,
        ctx.title_html()
    )
}

/// Titled section wrapper.
pub(crate) fn section(ctx: &RenderContext<'_>, body: &str) -> String {
    format!(
        "<div class=\"section\"{}>\n<h2 class=\"section-title\">{}</h2>\n{}</div>",
        ctx.style_attr(),
        ctx.title_html(),
        body
    )
}

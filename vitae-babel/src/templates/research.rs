//! `research-item`: research positions with labelled environment / methods lines.

use super::fields::{escaped, formatted, invalid, item_mapping, items, no_items, section, text};
use super::{RenderContext, RenderError};
use serde_yaml::{Mapping, Value};
use vitae_parser::vitae::{display_value, escape_html, is_falsy, normalize_items, DEFAULT_DELIMITER};

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let Some(items) = items(content) else {
        return Ok(no_items(ctx));
    };

    let mut body = String::new();
    for (index, item) in items.iter().enumerate() {
        let item = item_mapping(index, item)?;
        body.push_str("<div class=\"research-item\">\n");

        let references = text(item, "references")?
            .map(|references| format!(" {}", escape_html(&references)))
            .unwrap_or_default();
        body.push_str(&format!(
            "<div class=\"research-title\">{}{}</div>\n",
            escaped(item, "title")?,
            references
        ));

        let kind = text(item, "type")?
            .map(|kind| format!(" | {}", escape_html(&kind)))
            .unwrap_or_default();
        body.push_str(&format!(
            "<div class=\"research-type\">{}{}</div>\n",
            escaped(item, "institution")?,
            kind
        ));

        let description = formatted(item, "description", ctx)?;
        if !description.is_empty() {
            body.push_str(&format!(
                "<div class=\"research-description\">{description}</div>\n"
            ));
        }

        if let Some(environment) = item.get("technical_environment").filter(|v| !is_falsy(v)) {
            if environment.is_mapping() {
                return Err(invalid("technical_environment", "text or a list", environment));
            }
            body.push_str(&format!(
                "<div class=\"applied-methods\"><em>{}:</em> {}</div>\n",
                escape_html(ctx.label("technical_environment", "Technical Environment")),
                ctx.format(&normalize_items(Some(environment), DEFAULT_DELIMITER))
            ));
        }

        if let Some(methods) = item.get("applied_methods").filter(|v| !is_falsy(v)) {
            body.push_str(&format!(
                "<div class=\"applied-methods\"><em>{}:</em> <span class=\"methods-list\">{}</span></div>\n",
                escape_html(ctx.label("applied_methods", "Applied Methods")),
                methods_list(methods, ctx)?
            ));
        }

        body.push_str("</div>\n");
    }
    Ok(section(ctx, &body))
}

/// Strings are formatted as written; lists are escaped entry by entry and joined with ` | `.
fn methods_list(methods: &Value, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    match methods {
        Value::Sequence(entries) => Ok(entries
            .iter()
            .map(|method| escape_html(&display_value(method)))
            .collect::<Vec<_>>()
            .join(" | ")),
        Value::Mapping(_) => Err(invalid("applied_methods", "text or a list", methods)),
        other => Ok(ctx.format(&normalize_items(Some(other), DEFAULT_DELIMITER))),
    }
}

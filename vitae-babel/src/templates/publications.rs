//! `publications-block`: a formatted note and a profile link.

use super::fields::{formatted, section, text};
use super::{RenderContext, RenderError};
use serde_yaml::Mapping;
use vitae_parser::vitae::escape_html;

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let mut body = String::new();
    let note = formatted(content, "note", ctx)?;
    if !note.is_empty() {
        body.push_str(&format!("<div class=\"publications-note\">{note}</div>\n"));
    }
    if let Some(url) = text(content, "scholar_url")? {
        body.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"publications-link\">{}</a>\n",
            escape_html(&url),
            escape_html(ctx.label("scholar_url", "Google Scholar"))
        ));
    }
    Ok(section(ctx, &body))
}

//! `letter-block`: a cover letter.

use super::fields::{escaped, formatted, text};
use super::{RenderContext, RenderError};
use serde_yaml::Mapping;
use vitae_parser::vitae::escape_html;

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let mut recipient = Vec::new();
    for field in ["recipient_name", "recipient_title", "company"] {
        if let Some(line) = text(content, field)? {
            recipient.push(escape_html(&line));
        }
    }

    Ok(format!(
        "<div class=\"letter\"{}>\n<div class=\"letter-date\">{}</div>\n<div class=\"letter-recipient\">{}</div>\n<div class=\"letter-body\">{}</div>\n<div class=\"letter-closing\">{}</div>\n</div>",
        ctx.style_attr(),
        escaped(content, "date")?,
        recipient.join("<br>"),
        formatted(content, "body", ctx)?,
        escaped(content, "closing")?
    ))
}

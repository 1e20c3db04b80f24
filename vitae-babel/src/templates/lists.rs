//! Simple item lists: `item-list` (education) and `certificate-item`.

use super::fields::{escaped, formatted, item_mapping, items, no_items, section, text};
use super::{RenderContext, RenderError};
use serde_yaml::Mapping;
use vitae_parser::vitae::escape_html;

pub(crate) fn render_education(
    content: &Mapping,
    ctx: &RenderContext<'_>,
) -> Result<String, RenderError> {
    let Some(items) = items(content) else {
        return Ok(no_items(ctx));
    };

    let mut body = String::new();
    for (index, item) in items.iter().enumerate() {
        let item = item_mapping(index, item)?;
        body.push_str("<div class=\"education-item\">\n");
        if let Some(date) = text(item, "graduation_date")? {
            body.push_str(&format!("<span class=\"date\">{}</span>\n", ctx.format(&date)));
        }
        body.push_str(&format!(
            "<div class=\"degree\">{}</div>\n",
            formatted(item, "degree", ctx)?
        ));
        let campus = text(item, "campus")?
            .map(|campus| format!(" - {}", escape_html(&campus)))
            .unwrap_or_default();
        body.push_str(&format!(
            "<div class=\"institution\">{}{}</div>\n",
            formatted(item, "institution", ctx)?,
            campus
        ));
        body.push_str("</div>\n");
    }
    Ok(section(ctx, &body))
}

pub(crate) fn render_certificates(
    content: &Mapping,
    ctx: &RenderContext<'_>,
) -> Result<String, RenderError> {
    let Some(items) = items(content) else {
        return Ok(no_items(ctx));
    };

    let mut body = String::new();
    for (index, item) in items.iter().enumerate() {
        let item = item_mapping(index, item)?;
        body.push_str("<div class=\"certificate-item\">\n");
        body.push_str(&format!(
            "<div class=\"certificate-name\">{}</div>\n",
            escaped(item, "name")?
        ));
        if let Some(institution) = text(item, "institution")? {
            body.push_str(&format!(
                "<span class=\"certificate-institution\">{}</span>\n",
                escape_html(&institution)
            ));
        }
        if let Some(url) = text(item, "verification_url")? {
            body.push_str(&format!(
                "<a href=\"{}\" target=\"_blank\" class=\"certificate-link\">{}</a>\n",
                escape_html(&url),
                escape_html(ctx.label("verification_url", "Verify"))
            ));
        }
        body.push_str("</div>\n");
    }
    Ok(section(ctx, &body))
}

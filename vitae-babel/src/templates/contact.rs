//! `contact-header`: name, optional subtitle and a ` | ` separated contact line.

use super::fields::text;
use super::{RenderContext, RenderError};
use serde_yaml::Mapping;
use vitae_parser::vitae::escape_html;

pub(crate) fn render(content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
    let mut contact_items = Vec::new();
    if let Some(location) = text(content, "location")? {
        contact_items.push(escape_html(&location));
    }
    if let Some(email) = text(content, "email")? {
        contact_items.push(format!(
            r#"<a href="mailto:{}">{}</a>"#,
            escape_html(&email),
            escape_html(&email)
        ));
    }
    for field in ["linkedin", "github"] {
        if let Some(profile) = text(content, field)? {
            contact_items.push(format!(
                r#"<a href="{}" target="_blank">{}</a>"#,
                escape_html(&web_url(&profile)),
                escape_html(&profile)
            ));
        }
    }

    let mut html = format!(
        "<div class=\"header\"{}>\n<h1>{}</h1>\n",
        ctx.style_attr(),
        escape_html(&text(content, "name")?.unwrap_or_default())
    );
    if let Some(full_name) = text(content, "full_name")? {
        html.push_str(&format!(
            "<div class=\"subtitle\">{}</div>\n",
            escape_html(&full_name)
        ));
    }
    html.push_str(&format!(
        "<div class=\"contact-info\">{}</div>\n</div>",
        contact_items.join(" | ")
    ));
    Ok(html)
}

/// Profiles are usually written without a scheme (`github.com/jane`).
fn web_url(profile: &str) -> String {
    if profile.starts_with("https://") || profile.starts_with("http://") {
        profile.to_string()
    } else {
        format!("https://{profile}")
    }
}

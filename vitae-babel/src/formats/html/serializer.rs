//! HTML serialization (render pass -> standalone page)

use super::HtmlTheme;
use crate::error::FormatError;
use crate::session::{DisplaySettings, RenderPass};
use vitae_parser::vitae::escape_html;

/// Font size variables per scheme.
fn font_sizes(scheme: u8) -> [(&'static str, &'static str); 5] {
    match scheme {
        1 => [
            ("font-tiny", "8pt"),
            ("font-small", "9pt"),
            ("font-base", "10pt"),
            ("font-medium", "12pt"),
            ("font-large", "16pt"),
        ],
        3 => [
            ("font-tiny", "10pt"),
            ("font-small", "11pt"),
            ("font-base", "12pt"),
            ("font-medium", "14pt"),
            ("font-large", "20pt"),
        ],
        _ => [
            ("font-tiny", "9pt"),
            ("font-small", "10pt"),
            ("font-base", "11pt"),
            ("font-medium", "13pt"),
            ("font-large", "18pt"),
        ],
    }
}

/// Serialize a render pass to a complete HTML page
pub fn serialize_to_html(pass: &RenderPass) -> Result<String, FormatError> {
    let page = &pass.page;
    wrap_in_document(pass.markup(), &page.title, page.theme, &page.display)
}

/// Strip characters that could end a declaration or a style element.
fn css_value(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !matches!(ch, '<' | '>' | '{' | '}' | ';'))
        .collect()
}

fn theme_css(theme: HtmlTheme, display: &DisplaySettings) -> String {
    let palette = theme.palette();
    let (heading_font, body_font) = theme.fonts();
    let body_font = display
        .font_face
        .as_deref()
        .map(css_value)
        .unwrap_or_else(|| body_font.to_string());

    let mut vars = vec![
        ("theme-primary", palette.primary.to_string()),
        ("theme-secondary", palette.secondary.to_string()),
        ("theme-accent", palette.accent.to_string()),
        ("theme-text", palette.text.to_string()),
        ("theme-background", palette.background.to_string()),
        ("theme-divider", palette.divider.to_string()),
        ("theme-heading-font", heading_font.to_string()),
        ("theme-body-font", body_font),
    ];
    vars.extend(
        font_sizes(display.font_scheme)
            .into_iter()
            .map(|(name, size)| (name, size.to_string())),
    );
    vars.push(("page-margin", css_value(&display.margin)));

    let declarations = vars
        .iter()
        .map(|(name, value)| format!("  --{name}: {value};"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        ":root {{\n{declarations}\n}}\n#resume-container {{ padding: var(--page-margin); }}\n.layout {{ {} }}\n",
        theme.layout().css()
    )
}

fn wrap_in_document(
    body_html: &str,
    title: &str,
    theme: HtmlTheme,
    display: &DisplaySettings,
) -> Result<String, FormatError> {
    let baseline_css = include_str!("../../../css/baseline.css");

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="vitae-babel">
  <title>{}</title>
  <style>
{}
{}
  </style>
</head>
<body class="theme-{}">
<div id="resume-container" class="layout {}">
{}
</div>
</body>
</html>"#,
        escape_html(title),
        baseline_css,
        theme_css(theme, display),
        theme.name(),
        theme.layout().name(),
        body_html
    );

    Ok(html)
}

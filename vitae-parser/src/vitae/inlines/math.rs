//! Math typesetting seam
//!
//! The formatter hands every `$$…$$` expression to a [`MathRenderer`]. With the `mathml`
//! feature (on by default) [`LatexMathml`] converts LaTeX into MathML via `latex2mathml`.
//! A formatter without a renderer, or a renderer that rejects an expression, degrades to a
//! visibly flagged copy of the source; math never fails a render.

#[cfg(feature = "mathml")]
use once_cell::sync::Lazy;
#[cfg(feature = "mathml")]
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("Math renderer not available")]
    Unavailable,
    #[error("LaTeX Error: {0}")]
    Invalid(String),
}

/// Renders one inline math expression to markup.
pub trait MathRenderer: Send + Sync {
    fn render_inline(&self, expression: &str) -> Result<String, MathError>;
}

/// `latex2mathml` reports some parse failures inline instead of as an `Err`.
#[cfg(feature = "mathml")]
const PARSE_ERROR_MARKER: &str = "[PARSE ERROR";

#[cfg(feature = "mathml")]
static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"</?[A-Za-z][A-Za-z0-9]*(?:\s+[A-Za-z][A-Za-z0-9:-]*="[^"<>]*")*\s*/?>"#)
        .expect("valid regex")
});
#[cfg(feature = "mathml")]
static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&(?:#[0-9]+|#[xX][0-9A-Fa-f]+|[A-Za-z][A-Za-z0-9]*);").expect("valid regex")
});

/// LaTeX to MathML, inline display style.
#[cfg(feature = "mathml")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LatexMathml;

#[cfg(feature = "mathml")]
impl MathRenderer for LatexMathml {
    fn render_inline(&self, expression: &str) -> Result<String, MathError> {
        let markup =
            latex2mathml::latex_to_mathml(expression, latex2mathml::DisplayStyle::Inline)
                .map_err(|err| MathError::Invalid(err.to_string()))?;
        if let Some(start) = markup.find(PARSE_ERROR_MARKER) {
            let detail = markup[start + PARSE_ERROR_MARKER.len()..]
                .trim_start_matches(':')
                .split("]<")
                .next()
                .unwrap_or_default()
                .trim();
            return Err(MathError::Invalid(detail.to_string()));
        }
        Ok(sanitize_mathml(&markup))
    }
}

/// Escape markup characters that appear as text between MathML tags (`<mo><</mo>`).
#[cfg(feature = "mathml")]
fn sanitize_mathml(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut last = 0;
    for tag in TAG.find_iter(markup) {
        escape_text(&markup[last..tag.start()], &mut out);
        out.push_str(tag.as_str());
        last = tag.end();
    }
    escape_text(&markup[last..], &mut out);
    out
}

#[cfg(feature = "mathml")]
fn escape_text(text: &str, out: &mut String) {
    for (index, ch) in text.char_indices() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' if !ENTITY.is_match(&text[index..]) => out.push_str("&amp;"),
            other => out.push(other),
        }
    }
}

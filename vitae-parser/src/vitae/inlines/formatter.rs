//! The formatting passes
//!
//!     1. strip placeholder sentinels from the input
//!     2. math spans -> placeholder tokens (rendered markup kept aside)
//!     3. escape what is left
//!     4. bold, italic, underline, monospace (in that order, each non-greedy)
//!     5. placeholder tokens -> rendered math markup
//!
//!     Placeholders are a pair of private-use code points around the fragment index. Stripping
//!     them first means user text can never forge one.

use super::escape::escape_html;
use super::math::{MathError, MathRenderer};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::Arc;

const PLACEHOLDER_OPEN: char = '\u{E000}';
const PLACEHOLDER_CLOSE: char = '\u{E001}';

static MATH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\$(.+?)\$\$").expect("valid regex"));
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{E000}([0-9]+)\u{E001}").expect("valid regex"));

/// Inline grammar rules, applied in this order.
static INLINE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"\*\*(.+?)\*\*", "<b>$1</b>"),
        (r"\*(.+?)\*", "<em>$1</em>"),
        (r"__(.+?)__", "<u>$1</u>"),
        (r"`(.+?)`", r#"<code class="monospace">$1</code>"#),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).expect("valid regex"), replacement))
    .collect()
});

static DEFAULT_FORMATTER: Lazy<Formatter> = Lazy::new(Formatter::new);

/// Format `text` with the default formatter.
pub fn format_text(text: &str) -> String {
    DEFAULT_FORMATTER.format(text)
}

/// Turns raw user text into safe markup.
#[derive(Clone)]
pub struct Formatter {
    math: Option<Arc<dyn MathRenderer>>,
}

impl Formatter {
    /// Formatter with the default math renderer (when the `mathml` feature is enabled).
    pub fn new() -> Self {
        #[cfg(feature = "mathml")]
        {
            Self::with_math_renderer(super::math::LatexMathml)
        }
        #[cfg(not(feature = "mathml"))]
        {
            Self::without_math()
        }
    }

    /// Formatter with no math collaborator; every math span degrades to its flagged source.
    pub fn without_math() -> Self {
        Self { math: None }
    }

    pub fn with_math_renderer<R: MathRenderer + 'static>(renderer: R) -> Self {
        Self {
            math: Some(Arc::new(renderer)),
        }
    }

    pub fn has_math(&self) -> bool {
        self.math.is_some()
    }

    pub fn format(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        let text: String = text
            .chars()
            .filter(|ch| *ch != PLACEHOLDER_OPEN && *ch != PLACEHOLDER_CLOSE)
            .collect();

        let mut fragments: Vec<String> = Vec::new();
        let extracted = MATH.replace_all(&text, |caps: &Captures| {
            let index = fragments.len();
            fragments.push(self.render_math(&caps[1]));
            format!("{PLACEHOLDER_OPEN}{index}{PLACEHOLDER_CLOSE}")
        });

        let mut out = escape_html(&extracted);
        for (rule, replacement) in INLINE_RULES.iter() {
            out = rule.replace_all(&out, *replacement).into_owned();
        }

        if fragments.is_empty() {
            return out;
        }
        PLACEHOLDER
            .replace_all(&out, |caps: &Captures| {
                caps[1]
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| fragments.get(index))
                    .cloned()
                    .unwrap_or_default()
            })
            .into_owned()
    }

    fn render_math(&self, expression: &str) -> String {
        let result = match &self.math {
            Some(renderer) => renderer.render_inline(expression),
            None => Err(MathError::Unavailable),
        };
        match result {
            Ok(markup) => format!(
                r#"<span class="math-container" data-math-content="{}">{}</span>"#,
                escape_html(expression),
                markup
            ),
            Err(err) => {
                log::debug!("math fallback for {expression:?}: {err}");
                format!(
                    r#"<span class="math-error" title="{}">{}</span>"#,
                    escape_html(&err.to_string()),
                    escape_html(expression)
                )
            }
        }
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Formatter")
            .field("math", &self.has_math())
            .finish()
    }
}

//! Render session
//!
//!     A [`RenderSession`] owns everything a render pass depends on besides the source text:
//!     the theme, the document kind, the configured display settings and the engine. It also
//!     keeps the last source it rendered, so switching theme is `set_theme` + `rerender` with
//!     no reparse input from the caller.
//!
//!     Every pass reparses from scratch and produces an independent [`RenderPass`].

use crate::engine::{EngineOutput, RenderEngine};
use crate::formats::html::HtmlTheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use vitae_parser::vitae::{
    Diagnostic, DisplayPreferences, Document, DocumentLoader, LoaderError, Severity,
};

/// Lowest and highest supported font scheme.
pub const FONT_SCHEMES: std::ops::RangeInclusive<u8> = 1..=3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    #[default]
    Resume,
    CoverLetter,
    Portfolio,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Resume,
        DocumentKind::CoverLetter,
        DocumentKind::Portfolio,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DocumentKind::Resume => "resume",
            DocumentKind::CoverLetter => "cover-letter",
            DocumentKind::Portfolio => "portfolio",
        }
    }

    /// Page title used when the document does not name itself.
    pub fn default_title(self) -> &'static str {
        match self {
            DocumentKind::Resume => "Resume",
            DocumentKind::CoverLetter => "Cover Letter",
            DocumentKind::Portfolio => "Portfolio",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name.trim())
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved display settings for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub font_scheme: u8,
    pub margin: String,
    pub font_face: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            font_scheme: 2,
            margin: "0.3in".to_string(),
            font_face: None,
        }
    }
}

impl DisplaySettings {
    /// Apply a document's own preferences on top of these settings.
    ///
    /// An out of range font scheme or a blank margin is ignored.
    pub fn merged(&self, preferences: &DisplayPreferences) -> Self {
        let mut merged = self.clone();
        match preferences.font_scheme {
            Some(scheme) if FONT_SCHEMES.contains(&scheme) => merged.font_scheme = scheme,
            Some(scheme) => log::warn!("ignoring unsupported font scheme {scheme}"),
            None => {}
        }
        if let Some(margin) = preferences
            .margin
            .as_deref()
            .map(str::trim)
            .filter(|margin| !margin.is_empty())
        {
            merged.margin = margin.to_string();
        }
        if let Some(face) = preferences
            .font_face
            .as_deref()
            .map(str::trim)
            .filter(|face| !face.is_empty())
        {
            merged.font_face = Some(face.to_string());
        }
        merged
    }
}

/// Page level settings resolved for a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSettings {
    pub title: String,
    pub theme: HtmlTheme,
    pub kind: DocumentKind,
    pub display: DisplaySettings,
}

/// Result of one render pass.
#[derive(Debug, Clone)]
pub struct RenderPass {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
    pub output: EngineOutput,
    pub page: PageSettings,
}

impl RenderPass {
    pub fn markup(&self) -> &str {
        &self.output.markup
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    /// Export file name from the page title: `Jane Doe Resume` -> `Jane-Doe-Resume.html`.
    pub fn export_file_name(&self, extension: &str) -> String {
        let stem = self
            .page
            .title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        let stem = if stem.is_empty() {
            self.page.kind.default_title().replace(' ', "-")
        } else {
            stem
        };
        format!("{stem}.{}", extension.trim_start_matches('.'))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    theme: HtmlTheme,
    kind: DocumentKind,
    display: DisplaySettings,
    source: String,
    engine: RenderEngine,
}

impl RenderSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: HtmlTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_kind(mut self, kind: DocumentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_display(mut self, display: DisplaySettings) -> Self {
        self.display = display;
        self
    }

    pub fn with_engine(mut self, engine: RenderEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn set_theme(&mut self, theme: HtmlTheme) {
        self.theme = theme;
    }

    pub fn set_kind(&mut self, kind: DocumentKind) {
        self.kind = kind;
    }

    pub fn theme(&self) -> HtmlTheme {
        self.theme
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn display(&self) -> &DisplaySettings {
        &self.display
    }

    /// Source text of the last pass.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Remember `source` and render it.
    pub fn render(&mut self, source: impl Into<String>) -> Result<RenderPass, LoaderError> {
        self.source = source.into();
        self.rerender()
    }

    /// Render the last source again with the current settings.
    pub fn rerender(&self) -> Result<RenderPass, LoaderError> {
        let validated = DocumentLoader::from_string(self.source.as_str()).validate()?;
        let document = validated.document;

        let (title, display) = match document.meta() {
            Some(meta) => (meta.page_title(), self.display.merged(&meta.display())),
            None => (None, self.display.clone()),
        };
        let page = PageSettings {
            title: title.unwrap_or_else(|| self.kind.default_title().to_string()),
            theme: self.theme,
            kind: self.kind,
            display,
        };

        let output = self.engine.render(&document);
        log::debug!(
            "rendered {} of {} sections",
            output.fragment_count(),
            output.outcomes.len()
        );

        Ok(RenderPass {
            document,
            diagnostics: validated.diagnostics,
            output,
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_parser::vitae::Formatter;

    const SOURCE: &str = "_meta:\n  sections_order: [summary]\n  save_filename: jane-doe_resume\n  font_scheme: 3\n  margin: 0.5in\nsummary:\n  _type: summary\n  content: Hello\n";

    fn session() -> RenderSession {
        RenderSession::new()
            .with_engine(RenderEngine::new().with_formatter(Formatter::without_math()))
    }

    #[test]
    fn document_preferences_override_configured_display() {
        let pass = session().render(SOURCE).unwrap();
        assert_eq!(pass.page.title, "Jane Doe Resume");
        assert_eq!(pass.page.display.font_scheme, 3);
        assert_eq!(pass.page.display.margin, "0.5in");
        assert_eq!(pass.export_file_name("html"), "Jane-Doe-Resume.html");
        assert!(pass.markup().contains("Hello"));
        assert!(!pass.has_errors());
    }

    #[test]
    fn default_title_follows_document_kind() {
        let mut session = session().with_kind(DocumentKind::CoverLetter);
        let pass = session.render("a:\n  _type: summary\n").unwrap();
        assert_eq!(pass.page.title, "Cover Letter");
        assert_eq!(pass.export_file_name(".json"), "Cover-Letter.json");
        assert_eq!(pass.page.display, DisplaySettings::default());
    }

    #[test]
    fn rerender_uses_remembered_source_and_new_theme() {
        let mut session = session();
        let first = session.render(SOURCE).unwrap();
        assert_eq!(first.page.theme, HtmlTheme::Professional);

        session.set_theme(HtmlTheme::Creative);
        let second = session.rerender().unwrap();
        assert_eq!(second.page.theme, HtmlTheme::Creative);
        assert_eq!(second.markup(), first.markup());
        assert_eq!(session.source(), SOURCE);
    }

    #[test]
    fn unsupported_font_scheme_is_ignored() {
        let preferences = DisplayPreferences {
            font_scheme: Some(7),
            margin: Some("  ".to_string()),
            font_face: Some("Inter".to_string()),
        };
        let merged = DisplaySettings::default().merged(&preferences);
        assert_eq!(merged.font_scheme, 2);
        assert_eq!(merged.margin, "0.3in");
        assert_eq!(merged.font_face.as_deref(), Some("Inter"));
    }

    #[test]
    fn parse_failure_is_an_error() {
        let mut session = session();
        assert!(session.render("- just\n- a list\n").is_err());
    }

    #[test]
    fn missing_sections_are_reported() {
        let pass = session()
            .render("_meta:\n  sections_order: [work]\n")
            .unwrap();
        assert!(pass.has_errors());
        assert_eq!(pass.output.outcomes.len(), 0);
    }

    #[test]
    fn document_kind_names() {
        assert_eq!(DocumentKind::from_name("cover-letter"), Some(DocumentKind::CoverLetter));
        assert_eq!(DocumentKind::Portfolio.to_string(), "portfolio");
        assert_eq!(DocumentKind::from_name("memo"), None);
    }
}

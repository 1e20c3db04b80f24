//! Rendering engine
//!
//!     Walks a document in its current order and turns every renderable section into markup.
//!     Each entry ends in exactly one of:
//!
//!     - metadata key: ignored, no outcome recorded
//!     - not a mapping / no `_type` / unknown type: [`SectionOutcome::Skipped`]
//!     - renderer returned markup: [`SectionOutcome::Rendered`]
//!     - renderer returned a [`RenderError`]: an error placeholder takes the section's place and
//!       the outcome is [`SectionOutcome::Failed`]
//!
//!     A failing section never affects its neighbours.

use crate::templates::{RenderContext, RenderError, SectionKind, TemplateRegistry};
use serde_yaml::Value;
use std::fmt;
use vitae_parser::vitae::{escape_html, is_meta_key, Document, Formatter, Section};

/// Why a section produced no markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    NotAMapping,
    MissingType,
    UnknownType(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAMapping => write!(f, "not a mapping"),
            SkipReason::MissingType => write!(f, "no _type"),
            SkipReason::UnknownType(name) => write!(f, "unknown type \"{name}\""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    Rendered { key: String, kind: SectionKind },
    Skipped { key: String, reason: SkipReason },
    Failed { key: String, error: RenderError },
}

impl SectionOutcome {
    pub fn key(&self) -> &str {
        match self {
            SectionOutcome::Rendered { key, .. }
            | SectionOutcome::Skipped { key, .. }
            | SectionOutcome::Failed { key, .. } => key,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, SectionOutcome::Rendered { .. })
    }
}

/// Markup for a whole document plus what happened to each section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub markup: String,
    pub outcomes: Vec<SectionOutcome>,
}

impl EngineOutput {
    /// Number of sections that produced markup, placeholders included.
    pub fn fragment_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| !matches!(outcome, SectionOutcome::Skipped { .. }))
            .count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SectionOutcome> {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SectionOutcome::Failed { .. }))
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderEngine {
    registry: TemplateRegistry,
    formatter: Formatter,
}

impl RenderEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn registry(&self) -> &TemplateRegistry {
        &self.registry
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Render every section of `document`, in document order.
    pub fn render(&self, document: &Document) -> EngineOutput {
        let mut fragments = Vec::new();
        let mut outcomes = Vec::new();

        for (key, value) in document.entries() {
            if is_meta_key(key) {
                continue;
            }
            let (fragment, outcome) = self.render_entry(key, value);
            if let Some(fragment) = fragment {
                fragments.push(fragment);
            }
            outcomes.push(outcome);
        }

        EngineOutput {
            markup: fragments.join("\n"),
            outcomes,
        }
    }

    fn render_entry(&self, key: &str, value: &Value) -> (Option<String>, SectionOutcome) {
        let skipped = |reason| {
            (
                None,
                SectionOutcome::Skipped {
                    key: key.to_string(),
                    reason,
                },
            )
        };

        let Some(section) = Section::from_value(value) else {
            return skipped(SkipReason::NotAMapping);
        };
        let Some(declared) = section.declared_type.as_deref() else {
            log::warn!("section \"{key}\" has no _type and was skipped");
            return skipped(SkipReason::MissingType);
        };
        let Some(template) = self.registry.resolve(declared) else {
            log::warn!("section \"{key}\" has unknown type \"{declared}\" and was skipped");
            return skipped(SkipReason::UnknownType(declared.to_string()));
        };

        self.registry.check_fields(template, key, &section.content);

        let title = section.title.as_deref().unwrap_or_default();
        let ctx = RenderContext {
            key,
            title,
            labels: &section.labels,
            style: section.style.as_ref(),
            formatter: &self.formatter,
        };

        match template.kind.render(&section.content, &ctx) {
            Ok(markup) => (
                Some(markup),
                SectionOutcome::Rendered {
                    key: key.to_string(),
                    kind: template.kind,
                },
            ),
            Err(error) => {
                log::error!("failed to render section \"{key}\": {error}");
                let shown = section.title.as_deref().unwrap_or(key);
                (
                    Some(error_placeholder(shown)),
                    SectionOutcome::Failed {
                        key: key.to_string(),
                        error,
                    },
                )
            }
        }
    }
}

fn error_placeholder(title: &str) -> String {
    format!(
        r#"<div class="render-error">Error rendering {}</div>"#,
        escape_html(title)
    )
}

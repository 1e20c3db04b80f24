//! Section templates
//!
//!     A template binds a declared section type (`_type`) to a human name, the schema of the
//!     fields it expects and the renderer that turns its content into markup:
//!
//!     | type           | human name             | schema                        | renderer            |
//!     |----------------|------------------------|-------------------------------|---------------------|
//!     | `contact`      | Contact Header         | fields                        | contact-header      |
//!     | `summary`      | Summary Block          | fields                        | inline-summary      |
//!     | `education`    | Education List         | items                         | item-list           |
//!     | `skills`       | Skills with Categories | categories (`_title`/`_items`)| categorized-list    |
//!     | `work`         | Work Experience        | items                         | experience-item     |
//!     | `research`     | Research Experience    | items                         | research-item       |
//!     | `certificates` | Certificates           | items                         | certificate-item    |
//!     | `publications` | Publications           | fields                        | publications-block  |
//!     | `cover-letter` | Cover Letter           | fields                        | letter-block        |
//!     | `custom`       | Custom Section         | free-form                     | custom              |
//!
//!     The set is closed: [`SectionKind`] has one variant per type and [`SectionKind::render`]
//!     is an exhaustive match. The only lookup that can miss is resolving a type *name*, which
//!     the engine turns into a skipped section.
//!
//!     Renderers are pure functions of (content, [`RenderContext`]). Content never contains
//!     metadata keys. Missing optional fields omit their fragment; a field of an impossible
//!     shape is a [`RenderError`], which the engine isolates to that one section.

mod contact;
mod custom;
mod experience;
mod fields;
mod letter;
mod lists;
mod publications;
mod research;
mod skills;
mod summary;

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use thiserror::Error;
use vitae_parser::vitae::{escape_html, Formatter, Labels, SectionStyle};

/// A renderer fault. Scoped to one section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("item {index} must be a mapping, found {found}")]
    ItemNotMapping { index: usize, found: &'static str },

    #[error("field \"{field}\" must be {expected}, found {found}")]
    InvalidField {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("could not serialize section content: {0}")]
    Serialization(String),
}

/// Expected shape of a section's content. Advisory only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Flat optional fields.
    Fields(&'static [&'static str]),
    /// An `items` list whose entries carry these fields.
    Items(&'static [&'static str]),
    /// Nested category mappings, each with `_title` and `_items`.
    Categories,
    FreeForm,
}

impl Schema {
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            Schema::Fields(fields) | Schema::Items(fields) => *fields,
            Schema::Categories => &["_title", "_items"],
            Schema::FreeForm => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionKind {
    Contact,
    Summary,
    Education,
    Skills,
    Work,
    Research,
    Certificates,
    Publications,
    CoverLetter,
    Custom,
}

/// Static template descriptor.
#[derive(Debug, PartialEq, Eq)]
pub struct Template {
    pub kind: SectionKind,
    pub type_name: &'static str,
    pub name: &'static str,
    pub schema: Schema,
    pub renderer: &'static str,
}

static CONTACT: Template = Template {
    kind: SectionKind::Contact,
    type_name: "contact",
    name: "Contact Header",
    schema: Schema::Fields(&["name", "full_name", "location", "email", "linkedin", "github"]),
    renderer: "contact-header",
};

static SUMMARY: Template = Template {
    kind: SectionKind::Summary,
    type_name: "summary",
    name: "Summary Block",
    schema: Schema::Fields(&["content"]),
    renderer: "inline-summary",
};

static EDUCATION: Template = Template {
    kind: SectionKind::Education,
    type_name: "education",
    name: "Education List",
    schema: Schema::Items(&["institution", "degree", "graduation_date", "campus"]),
    renderer: "item-list",
};

static SKILLS: Template = Template {
    kind: SectionKind::Skills,
    type_name: "skills",
    name: "Skills with Categories",
    schema: Schema::Categories,
    renderer: "categorized-list",
};

static WORK: Template = Template {
    kind: SectionKind::Work,
    type_name: "work",
    name: "Work Experience",
    schema: Schema::Items(&["title", "company", "duration", "responsibilities"]),
    renderer: "experience-item",
};

static RESEARCH: Template = Template {
    kind: SectionKind::Research,
    type_name: "research",
    name: "Research Experience",
    schema: Schema::Items(&[
        "title",
        "institution",
        "type",
        "description",
        "technical_environment",
        "applied_methods",
    ]),
    renderer: "research-item",
};

static CERTIFICATES: Template = Template {
    kind: SectionKind::Certificates,
    type_name: "certificates",
    name: "Certificates",
    schema: Schema::Items(&["name", "institution", "verification_url"]),
    renderer: "certificate-item",
};

static PUBLICATIONS: Template = Template {
    kind: SectionKind::Publications,
    type_name: "publications",
    name: "Publications",
    schema: Schema::Fields(&["note", "scholar_url"]),
    renderer: "publications-block",
};

static COVER_LETTER: Template = Template {
    kind: SectionKind::CoverLetter,
    type_name: "cover-letter",
    name: "Cover Letter",
    schema: Schema::Fields(&[
        "date",
        "recipient_name",
        "recipient_title",
        "company",
        "body",
        "closing",
    ]),
    renderer: "letter-block",
};

static CUSTOM: Template = Template {
    kind: SectionKind::Custom,
    type_name: "custom",
    name: "Custom Section",
    schema: Schema::FreeForm,
    renderer: "custom",
};

impl SectionKind {
    pub const ALL: [SectionKind; 10] = [
        SectionKind::Contact,
        SectionKind::Summary,
        SectionKind::Education,
        SectionKind::Skills,
        SectionKind::Work,
        SectionKind::Research,
        SectionKind::Certificates,
        SectionKind::Publications,
        SectionKind::CoverLetter,
        SectionKind::Custom,
    ];

    pub fn template(self) -> &'static Template {
        match self {
            SectionKind::Contact => &CONTACT,
            SectionKind::Summary => &SUMMARY,
            SectionKind::Education => &EDUCATION,
            SectionKind::Skills => &SKILLS,
            SectionKind::Work => &WORK,
            SectionKind::Research => &RESEARCH,
            SectionKind::Certificates => &CERTIFICATES,
            SectionKind::Publications => &PUBLICATIONS,
            SectionKind::CoverLetter => &COVER_LETTER,
            SectionKind::Custom => &CUSTOM,
        }
    }

    pub fn type_name(self) -> &'static str {
        self.template().type_name
    }

    pub fn from_type_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == name.trim())
    }

    pub fn render(self, content: &Mapping, ctx: &RenderContext<'_>) -> Result<String, RenderError> {
        match self {
            SectionKind::Contact => contact::render(content, ctx),
            SectionKind::Summary => summary::render(content, ctx),
            SectionKind::Education => lists::render_education(content, ctx),
            SectionKind::Skills => skills::render(content, ctx),
            SectionKind::Work => experience::render(content, ctx),
            SectionKind::Research => research::render(content, ctx),
            SectionKind::Certificates => lists::render_certificates(content, ctx),
            SectionKind::Publications => publications::render(content, ctx),
            SectionKind::CoverLetter => letter::render(content, ctx),
            SectionKind::Custom => custom::render(content, ctx),
        }
    }
}

/// Everything a renderer may read besides the section content.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Key of the section in the document.
    pub key: &'a str,
    /// Display title (already resolved, not escaped).
    pub title: &'a str,
    pub labels: &'a Labels,
    pub style: Option<&'a SectionStyle>,
    pub formatter: &'a Formatter,
}

impl<'a> RenderContext<'a> {
    /// Label override for `field`, or `default`.
    pub fn label(&self, field: &str, default: &'static str) -> &'a str {
        let labels: &'a Labels = self.labels;
        labels
            .get(field)
            .map(String::as_str)
            .unwrap_or(default)
    }

    /// Run user text through the formatter.
    pub fn format(&self, text: &str) -> String {
        self.formatter.format(text)
    }

    pub fn title_html(&self) -> String {
        escape_html(self.title)
    }

    /// ` style="..."` for the section's style overrides, or an empty string.
    pub fn style_attr(&self) -> String {
        let Some(style) = self.style else {
            return String::new();
        };
        let declarations = style
            .declarations()
            .into_iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ");
        if declarations.is_empty() {
            return String::new();
        }
        format!(r#" style="{}""#, escape_html(&declarations))
    }
}

/// The set of templates an engine dispatches to.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: BTreeMap<&'static str, &'static Template>,
}

impl TemplateRegistry {
    /// An empty registry; every section resolves as unknown.
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registry with every built-in template.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in SectionKind::ALL {
            registry.register(kind);
        }
        registry
    }

    pub fn register(&mut self, kind: SectionKind) {
        let template = kind.template();
        self.templates.insert(template.type_name, template);
    }

    pub fn resolve(&self, type_name: &str) -> Option<&'static Template> {
        self.templates.get(type_name.trim()).copied()
    }

    pub fn has(&self, type_name: &str) -> bool {
        self.resolve(type_name).is_some()
    }

    /// Registered type names (sorted).
    pub fn list_types(&self) -> Vec<&'static str> {
        self.templates.keys().copied().collect()
    }

    pub fn templates(&self) -> impl Iterator<Item = &'static Template> + '_ {
        self.templates.values().copied()
    }

    /// Log (at `debug`) item fields the template expects but the content lacks.
    ///
    /// Purely advisory: nothing here affects rendering or produces diagnostics.
    pub fn check_fields(&self, template: &Template, key: &str, content: &Mapping) {
        let Schema::Items(expected) = template.schema else {
            return;
        };
        let Some(items) = content.get("items").and_then(Value::as_sequence) else {
            log::debug!("section \"{key}\" has no items list");
            return;
        };
        for (index, item) in items.iter().enumerate() {
            let Some(item) = item.as_mapping() else {
                continue;
            };
            for field in expected {
                if !item.contains_key(*field) {
                    log::debug!("section \"{key}\" item {index} missing field \"{field}\"");
                }
            }
        }
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

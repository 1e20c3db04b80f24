//! Rendering and output formats for vitae documents
//!
//!     This crate turns a validated [`Document`](vitae_parser::vitae::Document) into markup and
//!     the markup into deliverables (a standalone HTML page, a bare fragment, JSON).
//!
//! Architecture
//!
//!     - Templates: a closed set of section kinds ([`SectionKind`]), each bound to a schema and
//!       a renderer. Dispatch is an exhaustive match, so adding a kind without a renderer does
//!       not compile.
//!     - Engine: walks a document in order, resolves each section, renders it and isolates
//!       failures per section ([`SectionOutcome`]).
//!     - Session: the explicit render context (theme, document kind, display settings, last
//!       source text). Nothing in this crate keeps global state.
//!     - Formats: the `Format` trait and its registry, as the output side of a render pass.
//!
//!     This is a pure lib: it powers vitae-cli but never prints, reads env vars or assumes a
//!     shell. The only I/O is `publish` writing an artifact when asked to.
//!
//!     The file structure :
//!     .
//!     ├── debounce.rs             # single-slot cancel-and-reschedule task
//!     ├── engine.rs               # RenderEngine and per-section outcomes
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── formats
//!     │   ├── fragment            # engine markup only
//!     │   ├── html                # standalone page, themes
//!     │   └── json                # parsed document
//!     ├── presets.rs              # starter documents
//!     ├── publish.rs
//!     ├── registry.rs             # FormatRegistry
//!     ├── session.rs              # RenderSession / RenderPass
//!     └── templates               # SectionKind, TemplateRegistry and the renderers
//!
//! Testing
//!     Unit tests live next to each renderer; tests/ holds end to end rendering of whole
//!     documents.

pub mod debounce;
pub mod engine;
pub mod error;
pub mod format;
pub mod formats;
pub mod presets;
pub mod publish;
pub mod registry;
pub mod session;
pub mod templates;

pub use debounce::Debouncer;
pub use engine::{EngineOutput, RenderEngine, SectionOutcome, SkipReason};
pub use error::FormatError;
pub use format::Format;
pub use formats::html::{HtmlTheme, Layout};
pub use registry::FormatRegistry;
pub use session::{DisplaySettings, DocumentKind, PageSettings, RenderPass, RenderSession};
pub use templates::{RenderContext, RenderError, SectionKind, Template, TemplateRegistry};

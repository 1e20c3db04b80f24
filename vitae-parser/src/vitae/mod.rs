pub mod document;
pub mod extraction;
pub mod inlines;
pub mod loader;
pub mod normalize;
pub mod transforms;
pub mod validation;

pub use document::{
    is_meta_key, DisplayPreferences, Document, DocumentError, Meta, META_KEY, META_PREFIX,
};
pub use extraction::{extract_content, scalar_to_string, Labels, Section, SectionStyle};
pub use inlines::{escape_html, format_text, Formatter, MathError, MathRenderer};
pub use loader::{DocumentLoader, LoaderError};
pub use normalize::{display_value, is_falsy, normalize_items, DEFAULT_DELIMITER};
pub use transforms::TransformError;
pub use validation::{validate_and_reorder, Diagnostic, Severity, Validated};

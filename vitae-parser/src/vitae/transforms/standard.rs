//! Standard transform definitions
//!
//! Pre-built pipelines, defined as `once_cell::sync::Lazy` statics.

use crate::vitae::document::Document;
use crate::vitae::transforms::stages::{ParseYaml, QuoteBoldListItems, ValidateOrder};
use crate::vitae::transforms::Transform;
use crate::vitae::validation::Validated;
use once_cell::sync::Lazy;

/// Type alias for the shim transform
pub type ShimTransform = Transform<String, String>;

/// Type alias for the document transform
pub type DocumentTransform = Transform<String, Document>;

/// Type alias for the validated-document transform
pub type ValidatedTransform = Transform<String, Validated>;

/// Compatibility shim only: String -> String.
pub static COMPAT_SHIM: Lazy<ShimTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(QuoteBoldListItems::new()));

/// Source text to Document: shim, then YAML parsing.
pub static STRING_TO_DOCUMENT: Lazy<DocumentTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&COMPAT_SHIM).then(ParseYaml::new()));

/// Source text to a validated (reordered) Document with its Diagnostics.
pub static STRING_TO_VALIDATED: Lazy<ValidatedTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&STRING_TO_DOCUMENT)
        .then(ValidateOrder::new())
});

//! Order validation stage: Document -> Validated

use crate::vitae::document::Document;
use crate::vitae::transforms::{Runnable, TransformError};
use crate::vitae::validation::{validate_and_reorder, Validated};

/// Wraps [`validate_and_reorder`]. Never fails.
pub struct ValidateOrder;

impl ValidateOrder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ValidateOrder {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Document, Validated> for ValidateOrder {
    fn run(&self, input: Document) -> Result<Validated, TransformError> {
        Ok(validate_and_reorder(input))
    }
}

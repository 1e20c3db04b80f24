//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait and can be composed into a pipeline.

pub mod compat;
pub mod parsing;
pub mod validation;

pub use compat::{quote_bold_list_items, QuoteBoldListItems};
pub use parsing::ParseYaml;
pub use validation::ValidateOrder;

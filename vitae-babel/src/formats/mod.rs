//! Output formats
//!
//! Each format lives in its own module and implements [`Format`](crate::format::Format).

pub mod fragment;
pub mod html;
pub mod json;

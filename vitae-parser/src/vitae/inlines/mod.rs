//! Inline text formatting
//!
//!     Every user-provided string that ends up in markup goes through the [`Formatter`]. It
//!     produces HTML-safe text with a small inline grammar expanded:
//!
//!         **bold**        <b>
//!         *italic*        <em>
//!         __underline__   <u>
//!         `mono`          <code class="monospace">
//!         $$latex$$       <span class="math-container"> (or math-error on failure)
//!
//!     The order of the passes is what keeps the output safe: math spans are pulled out into
//!     placeholders first (so their source is not mangled), the rest is escaped, then the
//!     grammar is expanded over escaped text, and finally the pre-rendered math is put back.
//!
//!     Italic uses asterisks only. Underscore-delimited italics are not recognised, which keeps
//!     `__underline__` unambiguous.
//!
//!     See [formatter](formatter) for the passes and [math](math) for the typesetting seam.

mod escape;
pub mod formatter;
pub mod math;

pub use escape::escape_html;
pub use formatter::{format_text, Formatter};
pub use math::{MathError, MathRenderer};

#[cfg(feature = "mathml")]
pub use math::LatexMathml;

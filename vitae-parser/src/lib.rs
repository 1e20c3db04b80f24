//! # vitae-parser
//!
//! Document model and loading pipeline for vitae documents.
//!
//! A vitae document is a YAML mapping of named sections (contact header, work experience,
//! skills, a cover letter...), each tagged with a `_type`. This crate owns everything that
//! happens before a section is turned into markup:
//!
//! File Layout
//!
//!     src/vitae
//!       ├── document.rs      Document / Meta model (ordered top-level entries)
//!       ├── extraction.rs    Section view: reserved keys vs user content
//!       ├── inlines          Text formatter (escaping, inline markup, math)
//!       ├── loader.rs        DocumentLoader: file / string sources + transforms
//!       ├── normalize.rs     list-or-string field normalization
//!       ├── transforms       composable pipeline stages (shim, yaml, validation)
//!       └── validation.rs    declared-order validation and Diagnostics
//!
//! Rendering sections into markup lives in `vitae-babel`; this crate is shell agnostic and
//! never prints.

pub mod vitae;

//! Nested document serialization
//!
//! - `builder`: person → `PersonDocument` following the spouse-summary and
//!   full-children-expansion rules
//! - `writer`: pretty JSON text and atomic file output

pub mod builder;
pub mod writer;

pub use builder::{person_to_document, DocumentOptions, PersonDocument};
pub use writer::{to_pretty_json, write_document};

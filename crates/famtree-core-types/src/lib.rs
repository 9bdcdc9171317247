//! Core types shared across famtree facilities
//!
//! This crate provides foundational types used by the relationship model,
//! the error facility and the logging facility:
//!
//! - **Identity**: `PersonId`, the opaque token assigned to every person
//! - **Schema constants**: Canonical field keys and event names

pub mod identity;
pub mod schema;

pub use identity::PersonId;

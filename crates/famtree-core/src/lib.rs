//! famtree Core - in-memory family tree kernel
//!
//! This crate provides:
//! - Person model with symmetric spouse links and shared children sets
//! - An arena `Store` with validated mutation operations
//! - Deterministic pre-order traversal with an opt-in ancestry guard
//! - Nested document serialization and atomic JSON output
//! - Mermaid, Graphviz DOT and in-memory graph rendering
//!
//! # Example
//!
//! ```
//! use famtree_core::{add_children, create_person, set_spouse, FamilyTree, Gender, Store};
//!
//! let mut store = Store::new();
//! let john = create_person(&mut store, "John Doe".to_string(), Gender::Male, None).unwrap();
//! let jane = create_person(&mut store, "Jane Doe".to_string(), Gender::Female, None).unwrap();
//! let kid = create_person(&mut store, "Kid Doe".to_string(), Gender::Female, None).unwrap();
//! set_spouse(&mut store, &john, &jane).unwrap();
//! add_children(&mut store, &john, &[kid]).unwrap();
//!
//! let tree = FamilyTree::new("Doe", john);
//! assert!(tree.to_mermaid(&store).unwrap().starts_with("graph TD;"));
//! ```

// Logging macros resolve schema constants through this path
pub use famtree_core_types as core_types;

pub mod document;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod render;
pub mod traversal;

// Re-export commonly used types
pub use core_types::PersonId;
pub use document::{person_to_document, DocumentOptions, PersonDocument};
pub use errors::{ExError, ExErrorKind, FamilyTreeError, Result};
pub use model::{ChildrenSetId, FamilyTree, Gender, Person};
pub use ops::{
    add_children, create_person, get_children, get_children_ids, get_spouse, has_children,
    has_spouse, set_spouse, Store,
};
pub use render::{render_dot, render_mermaid, FamilyGraph, GraphSink, GraphvizRenderer};
pub use traversal::{walk, WalkEvent, WalkGuard};

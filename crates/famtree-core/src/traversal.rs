//! Depth-first traversal of the family graph
//!
//! - `walk`: flat pre-order event list (spouse, then children) consumed by
//!   the render adapters
//! - `AncestryPath`: the opt-in cycle guard shared with the document builder

pub mod guard;
pub mod walk;

pub use guard::{AncestryPath, WalkGuard};
pub use walk::{walk, WalkEvent};

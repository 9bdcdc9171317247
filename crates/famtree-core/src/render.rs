//! Presentation adapters over the traversal contract
//!
//! - `graph`: `GraphSink` capability interface and the in-memory `FamilyGraph`
//! - `graphviz`: DOT source and external engine invocation
//! - `mermaid`: Mermaid flowchart markup

pub mod graph;
pub mod graphviz;
pub mod mermaid;

pub use graph::{build_graph, EdgeLabel, FamilyGraph, GraphEdge, GraphNode, GraphSink};
pub use graphviz::{render_dot, DotGraph, GraphvizRenderer};
pub use mermaid::render_mermaid;

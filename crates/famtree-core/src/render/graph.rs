use std::collections::{HashMap, HashSet};

use famtree_core_types::PersonId;

use crate::errors::Result;
use crate::ops::Store;
use crate::traversal::{walk, WalkEvent, WalkGuard};

/// Label of a directed relationship edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    Spouse,
    Child,
}

impl EdgeLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeLabel::Spouse => "Spouse",
            EdgeLabel::Child => "Child",
        }
    }
}

impl std::fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability interface for graph backends
///
/// `add_node` may be called more than once for the same person; backends
/// must treat repeats as no-ops.
pub trait GraphSink {
    fn add_node(&mut self, id: &PersonId, label: &str);
    fn add_edge(&mut self, from: &PersonId, to: &PersonId, label: EdgeLabel);
}

/// Feed the graph reachable from `root` into `sink`
///
/// Each visited person becomes a node labelled with their name. Spouse
/// links become `Spouse` edges, children `Child` edges.
///
/// # Errors
/// * `PersonNotFound` - If `root` or a reachable person doesn't exist
/// * `CycleDetected` - If guarded and a person is their own ancestor
pub fn build_graph<S>(store: &Store, root: &PersonId, guard: WalkGuard, sink: &mut S) -> Result<()>
where
    S: GraphSink + ?Sized,
{
    for event in walk(store, root, guard)? {
        match event {
            WalkEvent::Visit(id) => {
                sink.add_node(&id, &store.get_person(&id)?.name);
            }
            WalkEvent::Spouse { person, spouse } => {
                sink.add_node(&spouse, &store.get_person(&spouse)?.name);
                sink.add_edge(&person, &spouse, EdgeLabel::Spouse);
            }
            WalkEvent::Child { parent, child } => {
                sink.add_node(&child, &store.get_person(&child)?.name);
                sink.add_edge(&parent, &child, EdgeLabel::Child);
            }
            WalkEvent::Parent(_) | WalkEvent::Leaf(_) => {}
        }
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: PersonId,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphEdge {
    pub from: PersonId,
    pub to: PersonId,
    pub label: EdgeLabel,
}

/// In-memory labelled directed graph
///
/// Nodes and edges keep first-insertion order; duplicates are dropped.
#[derive(Debug, Clone, Default)]
pub struct FamilyGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<PersonId, usize>,
    edges: Vec<GraphEdge>,
    edge_set: HashSet<GraphEdge>,
}

impl FamilyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph reachable from `root`
    ///
    /// # Errors
    /// * `PersonNotFound` - If `root` or a reachable person doesn't exist
    /// * `CycleDetected` - If guarded and a person is their own ancestor
    pub fn from_root(store: &Store, root: &PersonId, guard: WalkGuard) -> Result<Self> {
        let mut graph = Self::new();
        build_graph(store, root, guard, &mut graph)?;
        Ok(graph)
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &PersonId) -> bool {
        self.index.contains_key(id)
    }

    /// Label of a node
    pub fn label(&self, id: &PersonId) -> Option<&str> {
        self.index.get(id).map(|&i| self.nodes[i].label.as_str())
    }

    /// Outgoing edges of `id`, in insertion order
    pub fn edges_from<'a>(&'a self, id: &'a PersonId) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |edge| edge.from == *id)
    }

    /// Targets of outgoing edges of `id` with the given label
    pub fn targets(&self, id: &PersonId, label: EdgeLabel) -> Vec<PersonId> {
        self.edges_from(id)
            .filter(|edge| edge.label == label)
            .map(|edge| edge.to)
            .collect()
    }
}

impl GraphSink for FamilyGraph {
    fn add_node(&mut self, id: &PersonId, label: &str) {
        if self.index.contains_key(id) {
            return;
        }
        self.index.insert(*id, self.nodes.len());
        self.nodes.push(GraphNode {
            id: *id,
            label: label.to_string(),
        });
    }

    fn add_edge(&mut self, from: &PersonId, to: &PersonId, label: EdgeLabel) {
        let edge = GraphEdge {
            from: *from,
            to: *to,
            label,
        };
        if self.edge_set.insert(edge) {
            self.edges.push(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_label_display() {
        assert_eq!(EdgeLabel::Spouse.to_string(), "Spouse");
        assert_eq!(EdgeLabel::Child.to_string(), "Child");
    }

    #[test]
    fn test_family_graph_dedupes_nodes_and_edges() {
        let mut graph = FamilyGraph::new();
        let a = PersonId::new();
        let b = PersonId::new();

        graph.add_node(&a, "A");
        graph.add_node(&a, "A again");
        graph.add_node(&b, "B");
        graph.add_edge(&a, &b, EdgeLabel::Child);
        graph.add_edge(&a, &b, EdgeLabel::Child);
        graph.add_edge(&a, &b, EdgeLabel::Spouse);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.label(&a), Some("A"));
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.targets(&a, EdgeLabel::Child), vec![b]);
    }
}

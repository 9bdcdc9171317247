//! Mermaid flowchart markup
//!
//! Output shape, per walk event:
//! - spouse: `  {spouse}>{name}];` declaration, `{person} --> |Spouse| {spouse};` edge
//! - parent: `  {person}[[{name}]];` declaration
//! - child: `{parent} --> |Child| {child};` edge
//! - leaf: `  {person}([{name}]);` declaration
//!
//! The text is `graph TD;` plus the declarations joined by newlines, a
//! newline, then every edge prefixed by a newline. Node ids are the simple
//! (32 hex digit) form of the identity token.

use famtree_core_types::PersonId;

use crate::errors::Result;
use crate::ops::Store;
use crate::traversal::{walk, WalkEvent, WalkGuard};

const HEADER: &str = "graph TD;";

/// Render the family reachable from `root` as a Mermaid flowchart
///
/// # Errors
/// * `PersonNotFound` - If `root` or a reachable person doesn't exist
/// * `CycleDetected` - If guarded and a person is their own ancestor
pub fn render_mermaid(store: &Store, root: &PersonId, guard: WalkGuard) -> Result<String> {
    let mut declarations = vec![HEADER.to_string()];
    let mut edges = String::new();

    for event in walk(store, root, guard)? {
        match event {
            WalkEvent::Visit(_) => {}
            WalkEvent::Spouse { person, spouse } => {
                let name = &store.get_person(&spouse)?.name;
                declarations.push(format!("  {}>{}];", spouse.simple(), name));
                edges.push_str(&format!(
                    "\n  {} --> |Spouse| {};",
                    person.simple(),
                    spouse.simple()
                ));
            }
            WalkEvent::Parent(id) => {
                let name = &store.get_person(&id)?.name;
                declarations.push(format!("  {}[[{}]];", id.simple(), name));
            }
            WalkEvent::Child { parent, child } => {
                edges.push_str(&format!(
                    "\n  {} --> |Child| {};",
                    parent.simple(),
                    child.simple()
                ));
            }
            WalkEvent::Leaf(id) => {
                let name = &store.get_person(&id)?.name;
                declarations.push(format!("  {}([{}]);", id.simple(), name));
            }
        }
    }

    let mut text = declarations.join("\n");
    text.push('\n');
    text.push_str(&edges);
    Ok(text)
}

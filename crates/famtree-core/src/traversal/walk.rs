use famtree_core_types::PersonId;

use super::guard::{AncestryPath, WalkGuard};
use crate::errors::Result;
use crate::ops::Store;

/// One step of the pre-order family walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    /// Entering a person
    Visit(PersonId),
    /// The person's spouse link; the spouse is not recursed into
    Spouse { person: PersonId, spouse: PersonId },
    /// The person has a children set; `Child` events follow
    Parent(PersonId),
    /// The person has no children set
    Leaf(PersonId),
    /// Edge to a child; the child's own events follow immediately
    Child { parent: PersonId, child: PersonId },
}

/// Walk the graph reachable from `root`
///
/// Per person, in order: `Visit`, then `Spouse` if linked, then either
/// `Parent` followed by `Child` + the child's subtree for each child in
/// set order, or `Leaf`. The same tree shape always yields the same events.
///
/// # Arguments
/// * `store` - Reference to the Store
/// * `root` - Person to start from
/// * `guard` - Cycle protection mode
///
/// # Errors
/// * `PersonNotFound` - If `root` doesn't exist
/// * `CycleDetected` - If `guard` is `Ancestry` and a person is their own ancestor
pub fn walk(store: &Store, root: &PersonId, guard: WalkGuard) -> Result<Vec<WalkEvent>> {
    let mut events = Vec::new();
    let mut path = AncestryPath::new(guard);
    walk_person(store, root, &mut path, &mut events)?;
    Ok(events)
}

fn walk_person(
    store: &Store,
    id: &PersonId,
    path: &mut AncestryPath,
    events: &mut Vec<WalkEvent>,
) -> Result<()> {
    let person = store.get_person(id)?;
    path.enter(id)?;
    events.push(WalkEvent::Visit(*id));

    if let Some(spouse) = person.spouse_id {
        events.push(WalkEvent::Spouse {
            person: *id,
            spouse,
        });
    }

    match person.children_set {
        Some(set) => {
            events.push(WalkEvent::Parent(*id));
            for child in store.children_set_members(&set).unwrap_or_default() {
                events.push(WalkEvent::Child {
                    parent: *id,
                    child: *child,
                });
                walk_person(store, child, path, events)?;
            }
        }
        None => events.push(WalkEvent::Leaf(*id)),
    }

    path.leave();
    Ok(())
}

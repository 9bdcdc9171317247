#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{doe_family, new_store, person};
use famtree_core::{add_children, walk, FamilyTreeError, Gender, WalkEvent, WalkGuard};

#[test]
fn test_walk_doe_family() {
    let mut store = new_store();
    let f = doe_family(&mut store);

    let events = walk(&store, &f.john, WalkGuard::Unchecked).unwrap();

    assert_eq!(
        events,
        vec![
            WalkEvent::Visit(f.john),
            WalkEvent::Spouse {
                person: f.john,
                spouse: f.jane
            },
            WalkEvent::Parent(f.john),
            WalkEvent::Child {
                parent: f.john,
                child: f.child1
            },
            WalkEvent::Visit(f.child1),
            WalkEvent::Leaf(f.child1),
            WalkEvent::Child {
                parent: f.john,
                child: f.child2
            },
            WalkEvent::Visit(f.child2),
            WalkEvent::Leaf(f.child2),
        ]
    );
}

#[test]
fn test_spouse_is_not_recursed_into() {
    let mut store = new_store();
    let f = doe_family(&mut store);

    let events = walk(&store, &f.john, WalkGuard::Unchecked).unwrap();

    assert!(!events.contains(&WalkEvent::Visit(f.jane)));
}

#[test]
fn test_shared_descendant_visited_per_branch() {
    let mut store = new_store();
    let a = person(&mut store, "A", Gender::Male);
    let b = person(&mut store, "B", Gender::Female);
    let shared = person(&mut store, "Shared", Gender::Male);
    add_children(&mut store, &a, &[b, shared]).unwrap();
    add_children(&mut store, &b, &[shared]).unwrap();

    let events = walk(&store, &a, WalkGuard::Ancestry).unwrap();

    let visits = events
        .iter()
        .filter(|e| **e == WalkEvent::Visit(shared))
        .count();
    assert_eq!(visits, 2);
}

#[test]
fn test_self_descendant_detected_when_guarded() {
    let mut store = new_store();
    let a = person(&mut store, "A", Gender::Male);
    add_children(&mut store, &a, &[a]).unwrap();

    let err = walk(&store, &a, WalkGuard::Ancestry).unwrap_err();

    match err {
        FamilyTreeError::CycleDetected { person_id } => assert_eq!(person_id, a.to_string()),
        other => panic!("unexpected error: {other:?}"),
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{new_store, person};
use famtree_core::errors::FamilyTreeError;
use famtree_core::logging_facility::test_capture::init_test_capture;
use famtree_core::{add_children, create_person, set_spouse, Gender, PersonId};
use famtree_core::{log_op_end, log_op_error, log_op_start};
use famtree_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_CHILD_COUNT, FIELD_COMPONENT,
    FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_SPOUSE_ID,
};
use tracing::Level;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.events_for(op_name, EVENT_START);
    assert_eq!(start_events.len(), 1);
    assert!(start_events[0].field(FIELD_COMPONENT).is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let end_events = capture.events_for(op_name, EVENT_END);
    assert_eq!(end_events.len(), 1, "Should have exactly one end event");
    assert_eq!(end_events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = FamilyTreeError::PersonNotFound {
        person_id: "p1".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let error_events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(error_events.len(), 1, "Should have exactly one error event");
    assert_eq!(error_events[0].level, Level::ERROR);
    assert_eq!(error_events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(error_events[0].field(FIELD_ERR_KIND), Some("NotFound"));
}

fn events_for_person(
    capture: &famtree_core::logging_facility::TestCapture,
    op: &str,
    event: &str,
    id: &PersonId,
) -> usize {
    capture
        .events_for_person(op, event, &id.to_string())
        .len()
}

#[test]
fn test_create_person_logs_start_and_end() {
    let capture = init_test_capture();
    let mut store = new_store();

    let id = create_person(&mut store, "Logged".to_string(), Gender::Male, None).unwrap();

    assert_eq!(events_for_person(&capture, "create_person", EVENT_END, &id), 1);
    capture.assert_event_exists("create_person", EVENT_START);
}

#[test]
fn test_failed_add_children_logs_error() {
    let capture = init_test_capture();
    let mut store = new_store();
    let parent = person(&mut store, "Parent", Gender::Female);

    add_children(&mut store, &parent, &[]).unwrap_err();

    let parent_id = parent.to_string();
    let starts = events_for_person(&capture, "add_children", EVENT_START, &parent);
    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("add_children")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field(FIELD_ERR_CODE) == Some("ERR_INVALID_INPUT")
    });
    let ends = events_for_person(&capture, "add_children", EVENT_END, &parent);

    assert_eq!(starts, 1, "start for {}", parent_id);
    assert!(errors >= 1);
    assert_eq!(ends, 0);
}

#[test]
fn test_spouse_overwrite_warns() {
    let capture = init_test_capture();
    let mut store = new_store();
    let p = person(&mut store, "John", Gender::Male);
    let s = person(&mut store, "Jane", Gender::Female);
    let c = person(&mut store, "Stepchild", Gender::Male);
    add_children(&mut store, &s, &[c]).unwrap();

    set_spouse(&mut store, &p, &s).unwrap();

    let s_id = s.to_string();
    let warnings = capture.count_events(|e| {
        e.level == Level::WARN
            && e.op.as_deref() == Some("set_spouse")
            && e.person_id.as_deref() == Some(s_id.as_str())
            && e.field(FIELD_CHILD_COUNT) == Some("1")
    });
    assert_eq!(warnings, 1);
}

#[test]
fn test_spouse_without_children_does_not_warn() {
    let capture = init_test_capture();
    let mut store = new_store();
    let p = person(&mut store, "John", Gender::Male);
    let s = person(&mut store, "Jane", Gender::Female);

    set_spouse(&mut store, &p, &s).unwrap();

    let s_id = s.to_string();
    let warnings = capture.count_events(|e| {
        e.level == Level::WARN && e.person_id.as_deref() == Some(s_id.as_str())
    });
    assert_eq!(warnings, 0);

    let ends = capture.events_for_person("set_spouse", EVENT_END, &p.to_string());
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_SPOUSE_ID), Some(s_id.as_str()));
}

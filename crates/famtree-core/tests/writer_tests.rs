#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::fs;

use common::{doe_family, john_doe, new_store};
use famtree_core::document::{to_pretty_json, write_document, PersonDocument};
use famtree_core::{person_to_document, DocumentOptions, FamilyTree};
use serde_json::{json, Value};
use tempfile::TempDir;

#[test]
fn test_tree_written_as_pretty_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("family_tree.json");
    let mut store = new_store();
    let john = john_doe(&mut store);

    FamilyTree::new("Doe", john)
        .write_document(&store, &path)
        .unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "{\n  \"name\": \"John Doe\",\n  \"gender\": \"male\",\n  \"dob\": \"1980-01-01\"\n}"
    );
}

#[test]
fn test_written_document_reads_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out").join("doe.json");
    let mut store = new_store();
    let family = doe_family(&mut store);
    let tree = FamilyTree::new("Doe", family.john);

    tree.write_document(&store, &path).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, tree.to_value(&store).unwrap());

    let doc: PersonDocument = serde_json::from_value(parsed).unwrap();
    assert_eq!(doc, tree.to_document(&store).unwrap());
}

#[test]
fn test_field_order_with_id() {
    let mut store = new_store();
    let family = doe_family(&mut store);
    let doc = person_to_document(
        &store,
        &family.john,
        &DocumentOptions::default().exclude_id(false),
    )
    .unwrap();

    let text = to_pretty_json(&doc).unwrap();

    let positions: Vec<usize> = ["\"id\"", "\"name\"", "\"gender\"", "\"dob\"", "\"spouse\"", "\"children\""]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn test_overwrite_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tree.json");
    fs::write(&path, "stale").unwrap();
    let mut store = new_store();
    let john = john_doe(&mut store);
    let doc = person_to_document(&store, &john, &DocumentOptions::default()).unwrap();

    write_document(&doc, &path).unwrap();

    let parsed: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed["name"], json!("John Doe"));
}

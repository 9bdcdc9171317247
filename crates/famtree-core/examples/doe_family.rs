//! Doe Family Demo
//!
//! Builds a three-generation family and prints every output form:
//! 1. Nested JSON document
//! 2. Mermaid flowchart
//! 3. Graphviz DOT source
//! 4. Optional PNG via the `dot` binary, when installed
//!
//! Run with `RUST_LOG=famtree=debug` to see operation logs.

use chrono::NaiveDate;
use famtree_core::logging_facility::{init, Profile};
use famtree_core::{
    add_children, create_person, get_children, set_spouse, FamilyTree, Gender, GraphvizRenderer,
    Store,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::Development);

    println!("=== famtree Doe Family Demo ===\n");

    let mut store = Store::new();

    let john = create_person(
        &mut store,
        "John Doe".to_string(),
        Gender::Male,
        NaiveDate::from_ymd_opt(1980, 1, 1),
    )?;
    let jane = create_person(&mut store, "Jane Doe".to_string(), Gender::Female, None)?;
    let child1 = create_person(&mut store, "Child1".to_string(), Gender::Male, None)?;
    let child2 = create_person(&mut store, "Child2".to_string(), Gender::Female, None)?;
    let partner = create_person(&mut store, "Sam Roe".to_string(), Gender::Female, None)?;
    let grandchild = create_person(&mut store, "Grandchild".to_string(), Gender::Male, None)?;

    set_spouse(&mut store, &john, &jane)?;
    add_children(&mut store, &john, &[child1, child2])?;
    set_spouse(&mut store, &child1, &partner)?;
    add_children(&mut store, &partner, &[grandchild])?;

    let names: Vec<_> = get_children(&store, &jane)?
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    println!("Jane's children (shared with John): {}\n", names.join(", "));

    let tree = FamilyTree::new("Doe", john);

    // ===== Part 1: Document =====
    println!("## Document\n");
    println!("{}\n", famtree_core::document::to_pretty_json(&tree.to_document(&store)?)?);

    // ===== Part 2: Mermaid =====
    println!("## Mermaid\n");
    println!("{}\n", tree.to_mermaid(&store)?);

    // ===== Part 3: DOT =====
    println!("## Graphviz DOT\n");
    println!("{}", tree.to_dot(&store)?);

    // ===== Part 4: Image =====
    let out_dir = std::env::temp_dir().join("famtree-demo");
    tree.write_document(&store, &out_dir.join("family_tree.json"))?;
    match tree.render_image(&store, &GraphvizRenderer::default(), &out_dir) {
        Ok(path) => println!("Image written to {}", path.display()),
        Err(e) => println!("Skipping image: {}", e),
    }

    Ok(())
}

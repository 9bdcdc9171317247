use std::path::{Path, PathBuf};

use famtree_core_types::PersonId;

use crate::document::{person_to_document, write_document, DocumentOptions, PersonDocument};
use crate::errors::Result;
use crate::ops::Store;
use crate::render::{render_dot, render_mermaid, FamilyGraph, GraphvizRenderer};
use crate::traversal::WalkGuard;

/// A named view of the family rooted at one person
///
/// Holds only the root's identity; every output is computed from the store
/// at call time, so later mutations are always reflected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyTree {
    pub name: String,
    main_member: PersonId,
}

impl FamilyTree {
    pub fn new(name: impl Into<String>, main_member: PersonId) -> Self {
        Self {
            name: name.into(),
            main_member,
        }
    }

    pub fn main_member(&self) -> PersonId {
        self.main_member
    }

    /// Document of the main member with default options
    ///
    /// # Errors
    /// * `PersonNotFound` - If the main member or a reachable person doesn't exist
    pub fn to_document(&self, store: &Store) -> Result<PersonDocument> {
        person_to_document(store, &self.main_member, &DocumentOptions::default())
    }

    /// Mapping form of `to_document`
    ///
    /// # Errors
    /// Same as `to_document`, plus `Serialization`.
    pub fn to_value(&self, store: &Store) -> Result<serde_json::Value> {
        self.to_document(store)?.to_value()
    }

    /// Write the tree document to `path` as pretty JSON
    ///
    /// # Errors
    /// * `PersonNotFound` - If the main member or a reachable person doesn't exist
    /// * `Serialization` / `Io` - If the document cannot be written
    pub fn write_document(&self, store: &Store, path: &Path) -> Result<()> {
        let doc = self.to_document(store)?;
        write_document(&doc, path)
    }

    /// Mermaid flowchart of the tree
    ///
    /// # Errors
    /// * `PersonNotFound` - If the main member or a reachable person doesn't exist
    pub fn to_mermaid(&self, store: &Store) -> Result<String> {
        render_mermaid(store, &self.main_member, WalkGuard::Unchecked)
    }

    /// DOT source of the tree
    ///
    /// # Errors
    /// * `PersonNotFound` - If the main member or a reachable person doesn't exist
    pub fn to_dot(&self, store: &Store) -> Result<String> {
        render_dot(store, &self.main_member, WalkGuard::Unchecked)
    }

    /// In-memory labelled graph of the tree
    ///
    /// # Errors
    /// * `PersonNotFound` - If the main member or a reachable person doesn't exist
    pub fn to_graph(&self, store: &Store) -> Result<FamilyGraph> {
        FamilyGraph::from_root(store, &self.main_member, WalkGuard::Unchecked)
    }

    /// Render an image of the tree into `dir` with the given engine settings
    ///
    /// Returns the path of the written image.
    ///
    /// # Errors
    /// * `PersonNotFound` - If the main member or a reachable person doesn't exist
    /// * `Io` / `RenderEngine` - If the engine cannot produce the image
    pub fn render_image(
        &self,
        store: &Store,
        renderer: &GraphvizRenderer,
        dir: &Path,
    ) -> Result<PathBuf> {
        renderer.render_default(store, &self.main_member, WalkGuard::Unchecked, dir)
    }
}

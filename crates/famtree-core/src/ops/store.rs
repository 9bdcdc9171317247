use std::collections::HashMap;

use famtree_core_types::PersonId;

use crate::errors::{FamilyTreeError, Result};
use crate::model::{ChildrenSetId, Person};

/// In-memory store for people and their children sets
///
/// Owns every `Person` and every children set. People refer to each other
/// only by `PersonId`; spouses share one children set through a common
/// `ChildrenSetId`. Not thread-safe (no Arc/RwLock), designed for
/// single-threaded use.
#[derive(Debug, Clone, Default)]
pub struct Store {
    /// Map of Person ID to Person
    pub(crate) people: HashMap<PersonId, Person>,
    /// Map of children set handle to members, in insertion order
    pub(crate) children_sets: HashMap<ChildrenSetId, Vec<PersonId>>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self {
            people: HashMap::new(),
            children_sets: HashMap::new(),
        }
    }

    /// Get a Person by ID
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if the person doesn't exist.
    pub fn get_person(&self, id: &PersonId) -> Result<&Person> {
        self.people
            .get(id)
            .ok_or_else(|| FamilyTreeError::PersonNotFound {
                person_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a Person by ID
    ///
    /// Identity and relationship handles are not public fields, so callers
    /// can only edit plain attributes (name, gender, dob) through this.
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if the person doesn't exist.
    pub fn get_person_mut(&mut self, id: &PersonId) -> Result<&mut Person> {
        self.people
            .get_mut(id)
            .ok_or_else(|| FamilyTreeError::PersonNotFound {
                person_id: id.to_string(),
            })
    }

    /// List all people (unordered)
    pub fn list_people(&self) -> Vec<&Person> {
        self.people.values().collect()
    }

    /// Number of people in the store
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Insert a new Person into the store
    ///
    /// Relationship handles of `person` are reset, so an inserted record
    /// never points at sets or spouses it does not share.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if a record with the same ID exists; the
    /// stored record and its links are left untouched.
    pub fn insert_person(&mut self, mut person: Person) -> Result<()> {
        let id = person.id();
        if self.people.contains_key(&id) {
            return Err(FamilyTreeError::DuplicatePerson {
                person_id: id.to_string(),
            });
        }
        person.spouse_id = None;
        person.children_set = None;
        self.people.insert(id, person);
        Ok(())
    }

    /// Check if a Person exists
    pub fn contains(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    /// Members of a children set, in insertion order
    pub fn children_set_members(&self, set: &ChildrenSetId) -> Option<&[PersonId]> {
        self.children_sets.get(set).map(|members| members.as_slice())
    }

    /// Number of live children sets
    pub fn children_set_count(&self) -> usize {
        self.children_sets.len()
    }

    /// Allocate a new, empty children set
    pub(crate) fn allocate_children_set(&mut self) -> ChildrenSetId {
        let set = ChildrenSetId::new();
        self.children_sets.insert(set, Vec::new());
        set
    }

    /// Union `children` into `set`, skipping members already present
    pub(crate) fn extend_children_set(&mut self, set: ChildrenSetId, children: &[PersonId]) {
        let members = self.children_sets.entry(set).or_default();
        for child in children {
            if !members.contains(child) {
                members.push(*child);
            }
        }
    }

    /// Drop `set` if no person references it any more
    ///
    /// Returns true when the set was released.
    pub(crate) fn release_if_orphaned(&mut self, set: ChildrenSetId) -> bool {
        let referenced = self
            .people
            .values()
            .any(|person| person.children_set == Some(set));
        if referenced {
            return false;
        }
        self.children_sets.remove(&set).is_some()
    }
}

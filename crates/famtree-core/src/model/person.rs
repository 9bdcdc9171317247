use chrono::NaiveDate;
use famtree_core_types::PersonId;

use super::children::ChildrenSetId;
use super::gender::Gender;

/// Person - one node in the family graph
///
/// Relationships are stored as handles into the owning `Store`:
/// the spouse by `PersonId`, the children by a shared `ChildrenSetId`.
/// Both are only changed through `ops::person_ops`, which keeps the
/// spouse link symmetric and the children set shared between spouses.
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    /// Identity token, immutable after creation (matches the store key)
    id: PersonId,

    /// Display name
    pub name: String,

    pub gender: Gender,

    /// Date of birth, if known
    pub dob: Option<NaiveDate>,

    pub(crate) spouse_id: Option<PersonId>,

    /// `None` until children are first added (distinct from an empty set)
    pub(crate) children_set: Option<ChildrenSetId>,
}

impl Person {
    /// Create a new Person with a fresh identity and no relationships
    pub fn new(name: impl Into<String>, gender: Gender) -> Self {
        Self::with_id(PersonId::new(), name, gender)
    }

    /// Create a Person with a caller-provided identity
    pub fn with_id(id: PersonId, name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            dob: None,
            spouse_id: None,
            children_set: None,
        }
    }

    /// Set the date of birth (builder style)
    pub fn with_dob(mut self, dob: NaiveDate) -> Self {
        self.dob = Some(dob);
        self
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Check if this person has a spouse link
    pub fn has_spouse(&self) -> bool {
        self.spouse_id.is_some()
    }

    /// Check if a children set was ever created for this person
    pub fn has_children(&self) -> bool {
        self.children_set.is_some()
    }

    pub fn spouse_id(&self) -> Option<PersonId> {
        self.spouse_id
    }

    pub fn children_set(&self) -> Option<ChildrenSetId> {
        self.children_set
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Person(name={:?}, gender={})", self.name, self.gender)
    }
}

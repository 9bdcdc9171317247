use chrono::NaiveDate;
use famtree_core_types::PersonId;
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::{Gender, Person};
use crate::ops::Store;
use crate::traversal::{AncestryPath, WalkGuard};

/// Nested document form of a person
///
/// Field order is the serialized order: `id` (only when retained), `name`,
/// `gender`, `dob` (always present, `null` when unknown), then `spouse` and
/// `children` when included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PersonId>,

    pub name: String,

    pub gender: Gender,

    /// Serialized as `YYYY-MM-DD`
    pub dob: Option<NaiveDate>,

    /// Depth-1 summary: never carries its own spouse or children
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spouse: Option<Box<PersonDocument>>,

    /// Full recursive documents of each child
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PersonDocument>>,
}

impl PersonDocument {
    /// Base fields only
    fn base(person: &Person, exclude_id: bool) -> Self {
        Self {
            id: (!exclude_id).then_some(person.id()),
            name: person.name.clone(),
            gender: person.gender,
            dob: person.dob,
            spouse: None,
            children: None,
        }
    }

    /// Convert to a JSON value (mapping form)
    ///
    /// # Errors
    /// * `Serialization` - If encoding fails
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Options controlling `person_to_document`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Omit the `children` field
    pub exclude_children: bool,
    /// Omit the `spouse` field
    pub exclude_spouse: bool,
    /// Omit the root's identity token; nested documents never carry one
    pub exclude_id: bool,
    /// Cycle protection for the children recursion
    pub guard: WalkGuard,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            exclude_children: false,
            exclude_spouse: false,
            exclude_id: true,
            guard: WalkGuard::Unchecked,
        }
    }
}

impl DocumentOptions {
    pub fn exclude_children(mut self, exclude: bool) -> Self {
        self.exclude_children = exclude;
        self
    }

    pub fn exclude_spouse(mut self, exclude: bool) -> Self {
        self.exclude_spouse = exclude;
        self
    }

    pub fn exclude_id(mut self, exclude: bool) -> Self {
        self.exclude_id = exclude;
        self
    }

    pub fn with_guard(mut self, guard: WalkGuard) -> Self {
        self.guard = guard;
        self
    }

    /// Options applied to every child: defaults, keeping only the guard
    fn for_children(&self) -> Self {
        Self {
            guard: self.guard,
            ..Self::default()
        }
    }
}

/// Build the nested document of a person
///
/// - Base fields are always present.
/// - Unless `exclude_spouse`, a linked spouse is included as a summary with
///   no spouse or children of its own.
/// - Unless `exclude_children`, a non-empty children set is included as the
///   list of each child's full document (children's spouses and children
///   expanded), in set order.
///
/// # Errors
/// * `PersonNotFound` - If `id` or a reachable person doesn't exist
/// * `CycleDetected` - If guarded and a person is their own ancestor
pub fn person_to_document(
    store: &Store,
    id: &PersonId,
    options: &DocumentOptions,
) -> Result<PersonDocument> {
    let mut path = AncestryPath::new(options.guard);
    build(store, id, options, &mut path)
}

fn build(
    store: &Store,
    id: &PersonId,
    options: &DocumentOptions,
    path: &mut AncestryPath,
) -> Result<PersonDocument> {
    let person = store.get_person(id)?;
    path.enter(id)?;

    let mut doc = PersonDocument::base(person, options.exclude_id);

    if !options.exclude_spouse {
        if let Some(spouse_id) = person.spouse_id {
            let spouse = store.get_person(&spouse_id)?;
            doc.spouse = Some(Box::new(PersonDocument::base(spouse, true)));
        }
    }

    if !options.exclude_children {
        let members = person
            .children_set
            .and_then(|set| store.children_set_members(&set))
            .unwrap_or_default();
        if !members.is_empty() {
            let child_options = options.for_children();
            let mut children = Vec::with_capacity(members.len());
            for child in members {
                children.push(build(store, child, &child_options, path)?);
            }
            doc.children = Some(children);
        }
    }

    path.leave();
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{add_children, create_person, set_spouse};
    use serde_json::json;

    #[test]
    fn test_single_person_document() {
        let mut store = Store::new();
        let dob = NaiveDate::from_ymd_opt(1980, 1, 1);
        let id = create_person(&mut store, "John Doe".to_string(), Gender::Male, dob).unwrap();

        let doc = person_to_document(&store, &id, &DocumentOptions::default()).unwrap();

        assert_eq!(
            doc.to_value().unwrap(),
            json!({"name": "John Doe", "gender": "male", "dob": "1980-01-01"})
        );
    }

    #[test]
    fn test_retained_id_is_first_field() {
        let mut store = Store::new();
        let id = create_person(&mut store, "John".to_string(), Gender::Male, None).unwrap();

        let doc =
            person_to_document(&store, &id, &DocumentOptions::default().exclude_id(false)).unwrap();
        let text = serde_json::to_string(&doc).unwrap();

        assert!(text.starts_with(&format!("{{\"id\":\"{}\",\"name\"", id)));
    }

    #[test]
    fn test_spouse_summary_has_no_nested_relationships() {
        let mut store = Store::new();
        let john = create_person(&mut store, "John".to_string(), Gender::Male, None).unwrap();
        let jane = create_person(&mut store, "Jane".to_string(), Gender::Female, None).unwrap();
        let kid = create_person(&mut store, "Kid".to_string(), Gender::Male, None).unwrap();
        set_spouse(&mut store, &john, &jane).unwrap();
        add_children(&mut store, &john, &[kid]).unwrap();

        let doc = person_to_document(&store, &john, &DocumentOptions::default()).unwrap();
        let spouse = doc.spouse.expect("spouse should be included");

        assert_eq!(spouse.name, "Jane");
        assert!(spouse.spouse.is_none());
        assert!(spouse.children.is_none());
    }

    #[test]
    fn test_child_options_reset_exclusions() {
        let options = DocumentOptions::default()
            .exclude_children(true)
            .exclude_spouse(true)
            .exclude_id(false)
            .with_guard(WalkGuard::Ancestry);

        let child = options.for_children();
        assert!(!child.exclude_children);
        assert!(!child.exclude_spouse);
        assert!(child.exclude_id);
        assert_eq!(child.guard, WalkGuard::Ancestry);
    }
}

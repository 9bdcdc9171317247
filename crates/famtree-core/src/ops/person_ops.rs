//! Person CRUD and relationship mutation
//!
//! Every mutating operation validates all inputs before touching the store,
//! so a failed call leaves no partial link behind. Mutations are bracketed by
//! `log_op_start!` / `log_op_end!` / `log_op_error!`.

use std::time::Instant;

use chrono::NaiveDate;
use famtree_core_types::PersonId;

use super::store::Store;
use crate::errors::{FamilyTreeError, Result};
use crate::model::{Gender, Person};
use crate::{log_op_end, log_op_error, log_op_start};

/// Create a new Person and insert it into the store
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `name` - Display name (must not be empty or whitespace-only)
/// * `gender` - Gender of the person
/// * `dob` - Optional date of birth
///
/// # Returns
/// The identity token of the new person
///
/// # Errors
/// * `InvalidName` - If name is empty or contains only whitespace
pub fn create_person(
    store: &mut Store,
    name: String,
    gender: Gender,
    dob: Option<NaiveDate>,
) -> Result<PersonId> {
    log_op_start!("create_person", name = %name);
    let start = Instant::now();

    if name.trim().is_empty() {
        let err = FamilyTreeError::InvalidName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        };
        log_op_error!(
            "create_person",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err);
    }

    let mut person = Person::new(name, gender);
    person.dob = dob;
    let id = person.id();
    store.insert_person(person).map_err(|e| {
        log_op_error!(
            "create_person",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "create_person",
        duration_ms = start.elapsed().as_millis() as u64,
        person_id = %id
    );

    Ok(id)
}

/// Add one or more children to a person
///
/// Union semantics: children already in the set are skipped. The set is
/// created on the first call. If the person has a spouse, the spouse is
/// pointed at the same set so both parents observe every later addition.
///
/// # Errors
/// * `EmptyChildren` - If `children` is empty
/// * `PersonNotFound` - If the parent or any child doesn't exist
pub fn add_children(store: &mut Store, parent: &PersonId, children: &[PersonId]) -> Result<()> {
    log_op_start!(
        "add_children",
        person_id = %parent,
        child_count = children.len()
    );
    let start = Instant::now();

    add_children_impl(store, parent, children).map_err(|e| {
        log_op_error!(
            "add_children",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "add_children",
        duration_ms = start.elapsed().as_millis() as u64,
        person_id = %parent
    );

    Ok(())
}

fn add_children_impl(store: &mut Store, parent: &PersonId, children: &[PersonId]) -> Result<()> {
    if children.is_empty() {
        return Err(FamilyTreeError::EmptyChildren {
            person_id: parent.to_string(),
        });
    }

    let (existing_set, spouse_id) = {
        let person = store.get_person(parent)?;
        (person.children_set, person.spouse_id)
    };
    for child in children {
        store.get_person(child)?;
    }

    let set = match existing_set {
        Some(set) => set,
        None => {
            let set = store.allocate_children_set();
            store.get_person_mut(parent)?.children_set = Some(set);
            set
        }
    };
    store.extend_children_set(set, children);

    if let Some(spouse_id) = spouse_id {
        let spouse = store.get_person_mut(&spouse_id)?;
        if spouse.children_set != Some(set) {
            if let Some(previous) = spouse.children_set.replace(set) {
                store.release_if_orphaned(previous);
            }
        }
    }

    Ok(())
}

/// Marry two people
///
/// Establishes the symmetric spouse link and copies `person`'s children
/// handle onto `spouse`. The copy replaces whatever `spouse` had before,
/// including replacing an existing set with "no set".
///
/// # Errors
/// * `SelfMarriage` - If both IDs are the same person
/// * `PersonNotFound` - If either person doesn't exist
/// * `AlreadyMarried` - If either person already has a spouse
pub fn set_spouse(store: &mut Store, person: &PersonId, spouse: &PersonId) -> Result<()> {
    log_op_start!("set_spouse", person_id = %person, spouse_id = %spouse);
    let start = Instant::now();

    set_spouse_impl(store, person, spouse).map_err(|e| {
        log_op_error!(
            "set_spouse",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "set_spouse",
        duration_ms = start.elapsed().as_millis() as u64,
        person_id = %person,
        spouse_id = %spouse
    );

    Ok(())
}

fn set_spouse_impl(store: &mut Store, person_id: &PersonId, spouse_id: &PersonId) -> Result<()> {
    if person_id == spouse_id {
        return Err(FamilyTreeError::SelfMarriage {
            person_id: person_id.to_string(),
        });
    }

    let person = store.get_person(person_id)?;
    let spouse = store.get_person(spouse_id)?;

    for party in [person, spouse] {
        if let Some(existing) = party.spouse_id {
            let existing = store.get_person(&existing)?;
            return Err(FamilyTreeError::AlreadyMarried {
                person_id: party.id().to_string(),
                name: party.name.clone(),
                spouse_id: existing.id().to_string(),
                spouse_name: existing.name.clone(),
            });
        }
    }

    let shared = person.children_set;
    let replaced = spouse.children_set.filter(|set| Some(*set) != shared);

    store.get_person_mut(person_id)?.spouse_id = Some(*spouse_id);
    let spouse = store.get_person_mut(spouse_id)?;
    spouse.spouse_id = Some(*person_id);
    spouse.children_set = shared;

    if let Some(previous) = replaced {
        let dropped = store
            .children_set_members(&previous)
            .map(|members| members.len())
            .unwrap_or(0);
        if dropped > 0 {
            tracing::warn!(
                component = module_path!(),
                op = "set_spouse",
                person_id = %spouse_id,
                child_count = dropped,
                "spouse children set replaced by partner's set"
            );
        }
        store.release_if_orphaned(previous);
    }

    Ok(())
}

/// Get the spouse of a person
///
/// # Errors
/// * `PersonNotFound` - If the person doesn't exist
/// * `NoSpouse` - If no spouse link was established
pub fn get_spouse<'a>(store: &'a Store, id: &PersonId) -> Result<&'a Person> {
    let person = store.get_person(id)?;
    match person.spouse_id {
        Some(spouse_id) => store.get_person(&spouse_id),
        None => Err(FamilyTreeError::NoSpouse {
            person_id: id.to_string(),
            name: person.name.clone(),
        }),
    }
}

/// Check whether a person has a spouse
///
/// # Errors
/// * `PersonNotFound` - If the person doesn't exist
pub fn has_spouse(store: &Store, id: &PersonId) -> Result<bool> {
    Ok(store.get_person(id)?.has_spouse())
}

/// Get the IDs in a person's children set, in insertion order
///
/// # Errors
/// * `PersonNotFound` - If the person doesn't exist
/// * `NoChildren` - If children were never added
pub fn get_children_ids<'a>(store: &'a Store, id: &PersonId) -> Result<&'a [PersonId]> {
    let person = store.get_person(id)?;
    person
        .children_set
        .and_then(|set| store.children_set_members(&set))
        .ok_or_else(|| FamilyTreeError::NoChildren {
            person_id: id.to_string(),
            name: person.name.clone(),
        })
}

/// Get a person's children
///
/// # Errors
/// * `PersonNotFound` - If the person doesn't exist
/// * `NoChildren` - If children were never added
pub fn get_children<'a>(store: &'a Store, id: &PersonId) -> Result<Vec<&'a Person>> {
    get_children_ids(store, id)?
        .iter()
        .map(|child| store.get_person(child))
        .collect()
}

/// Check whether a person has a children set
///
/// # Errors
/// * `PersonNotFound` - If the person doesn't exist
pub fn has_children(store: &Store, id: &PersonId) -> Result<bool> {
    Ok(store.get_person(id)?.has_children())
}

use chrono::NaiveDate;
use famtree_core::{add_children, create_person, set_spouse, Gender, PersonId, Store};

/// Create a new empty Store for testing
#[allow(dead_code)]
pub fn new_store() -> Store {
    Store::new()
}

/// Create a person with no date of birth
#[allow(dead_code)]
pub fn person(store: &mut Store, name: &str, gender: Gender) -> PersonId {
    create_person(store, name.to_string(), gender, None).unwrap()
}

/// John Doe, male, born 1980-01-01
#[allow(dead_code)]
pub fn john_doe(store: &mut Store) -> PersonId {
    create_person(
        store,
        "John Doe".to_string(),
        Gender::Male,
        NaiveDate::from_ymd_opt(1980, 1, 1),
    )
    .unwrap()
}

/// The Doe family used across scenario tests
#[allow(dead_code)]
pub struct DoeFamily {
    pub john: PersonId,
    pub jane: PersonId,
    pub child1: PersonId,
    pub child2: PersonId,
}

/// John married to Jane, with Child1 (male) and Child2 (female)
#[allow(dead_code)]
pub fn doe_family(store: &mut Store) -> DoeFamily {
    let john = john_doe(store);
    let jane = person(store, "Jane Doe", Gender::Female);
    let child1 = person(store, "Child1", Gender::Male);
    let child2 = person(store, "Child2", Gender::Female);

    set_spouse(store, &john, &jane).unwrap();
    add_children(store, &john, &[child1, child2]).unwrap();

    DoeFamily {
        john,
        jane,
        child1,
        child2,
    }
}

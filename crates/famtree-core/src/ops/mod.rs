pub mod person_ops;
pub mod store;

pub use person_ops::{
    add_children, create_person, get_children, get_children_ids, get_spouse, has_children,
    has_spouse, set_spouse,
};
pub use store::Store;

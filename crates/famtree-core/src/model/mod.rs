pub mod children;
pub mod family_tree;
pub mod gender;
pub mod person;

pub use children::ChildrenSetId;
pub use family_tree::FamilyTree;
pub use gender::Gender;
pub use person::Person;

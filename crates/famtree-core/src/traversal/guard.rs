use famtree_core_types::PersonId;

use crate::errors::{FamilyTreeError, Result};

/// Cycle protection mode for recursive traversals
///
/// Mutation never prevents a person from becoming their own descendant.
/// `Unchecked` keeps that behaviour and recursion on such a graph does not
/// terminate. `Ancestry` fails with `CycleDetected` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkGuard {
    #[default]
    Unchecked,
    Ancestry,
}

/// The chain of people from the traversal root to the current person
///
/// Revisiting a person through a different branch is allowed; only a
/// person reappearing below themselves counts as a cycle.
#[derive(Debug, Clone, Default)]
pub struct AncestryPath {
    guard: WalkGuard,
    path: Vec<PersonId>,
}

impl AncestryPath {
    pub fn new(guard: WalkGuard) -> Self {
        Self {
            guard,
            path: Vec::new(),
        }
    }

    /// Push `id` onto the path
    ///
    /// # Errors
    /// * `CycleDetected` - If guarded and `id` is already an ancestor
    pub fn enter(&mut self, id: &PersonId) -> Result<()> {
        if self.guard == WalkGuard::Ancestry && self.path.contains(id) {
            return Err(FamilyTreeError::CycleDetected {
                person_id: id.to_string(),
            });
        }
        self.path.push(*id);
        Ok(())
    }

    pub fn leave(&mut self) {
        self.path.pop();
    }

    /// Current depth (root = 1 while inside it)
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_allows_reentry() {
        let mut path = AncestryPath::new(WalkGuard::Unchecked);
        let id = PersonId::new();

        path.enter(&id).unwrap();
        path.enter(&id).unwrap();
        assert_eq!(path.depth(), 2);
    }

    #[test]
    fn test_ancestry_rejects_reentry() {
        let mut path = AncestryPath::new(WalkGuard::Ancestry);
        let id = PersonId::new();

        path.enter(&id).unwrap();
        let result = path.enter(&id);
        assert!(matches!(result, Err(FamilyTreeError::CycleDetected { .. })));
    }

    #[test]
    fn test_ancestry_allows_sibling_revisit() {
        let mut path = AncestryPath::new(WalkGuard::Ancestry);
        let root = PersonId::new();
        let shared = PersonId::new();

        path.enter(&root).unwrap();
        path.enter(&shared).unwrap();
        path.leave();
        path.enter(&shared).unwrap();
        assert_eq!(path.depth(), 2);
    }
}

use uuid::Uuid;

/// Handle to a children set owned by the `Store`
///
/// Spouses hold the same handle, so both observe one membership list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChildrenSetId(Uuid);

impl ChildrenSetId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ChildrenSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

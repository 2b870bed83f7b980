/// Stable reference to a node owned by an [`OrderedActorList`](crate::OrderedActorList).
///
/// Handles are never reused: once the node is removed, the handle stays
/// invalid for the life of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(pub(crate) usize);

impl Handle {
    /// Returns the raw numeric identifier for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.0
    }
}

use crate::id::Id;

/// An event that a user has marked for later.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WishlistEntry {
    pub user_id: Id,
    pub event_id: Id,
}

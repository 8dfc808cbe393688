use crate::{id::Id, rating::RatingValue, time::Timestamp};

/// At most one review per user and event.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub event_id   : Id,
    pub user_id    : Id,
    pub rating     : RatingValue,
    pub comment    : Option<String>,
    // Millisecond precision
    pub created_at : Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewWithAuthor {
    pub review: Review,
    pub username: String,
}

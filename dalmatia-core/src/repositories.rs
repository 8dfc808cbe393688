// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use std::io;

use thiserror::Error;

use crate::entities::{
    category::*, event::*, geo::MapBbox, id::Id, place::*, rating::RatingSummary, review::*,
    time::Timestamp, user::*,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PlaceRepo {
    fn create_place(&self, place: Place) -> Result<()>;
    fn update_place(&self, place: &Place) -> Result<()>;

    fn get_place(&self, id: &str) -> Result<Place>;
    fn try_get_place_by_name(&self, name: &str) -> Result<Option<Place>>;

    // Ordered by name
    fn all_places(&self) -> Result<Vec<Place>>;
    // Ordered by name, without loading boundaries
    fn all_place_names(&self) -> Result<Vec<(Id, String)>>;
    fn count_places(&self) -> Result<usize>;
}

pub trait CategoryRepo {
    fn create_category(&self, category: Category) -> Result<()>;
    fn get_category(&self, id: &str) -> Result<Category>;

    // Ordered by name
    fn all_categories(&self) -> Result<Vec<Category>>;
}

/// Storage-level pre-filter of events.
///
/// All criteria are combined with AND. Absent criteria
/// do not restrict the result.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    pub bbox: Option<MapBbox>,
    pub category_id: Option<Id>,
    pub start_min: Option<Timestamp>,
    pub end_max: Option<Timestamp>,
    pub created_by: Option<Id>,
}

pub trait EventRepo {
    fn create_event(&self, event: Event) -> Result<()>;
    fn update_event(&self, event: &Event) -> Result<()>;
    // Also deletes all reviews and wishlist entries of the event
    fn delete_event(&self, id: &str) -> Result<()>;

    fn get_event(&self, id: &str) -> Result<Event>;
    fn get_events_chronologically(&self, ids: &[&str]) -> Result<Vec<Event>>;

    fn all_events_chronologically(&self) -> Result<Vec<Event>>;
    fn filter_events_chronologically(&self, filter: &EventFilter) -> Result<Vec<Event>>;

    fn count_events(&self) -> Result<usize>;

    /// Recalculate the denormalized rating from all current reviews
    /// of the event in a single aggregate operation.
    fn recalculate_event_rating(&self, id: &str) -> Result<RatingSummary>;
}

pub trait ReviewRepo {
    fn create_review(&self, review: Review) -> Result<()>;
    fn update_review(&self, review: &Review) -> Result<()>;
    fn delete_review(&self, event_id: &str, user_id: &str) -> Result<()>;

    fn try_get_review(&self, event_id: &str, user_id: &str) -> Result<Option<Review>>;
    // Newest first
    fn load_reviews_of_event(&self, event_id: &str) -> Result<Vec<Review>>;
}

pub trait WishlistRepo {
    fn add_to_wishlist(&self, user_id: &str, event_id: &str) -> Result<()>;
    // Ok(false) if the event has not been on the wishlist
    fn remove_from_wishlist(&self, user_id: &str, event_id: &str) -> Result<bool>;
    fn load_wishlist_event_ids(&self, user_id: &str) -> Result<Vec<Id>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;

    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

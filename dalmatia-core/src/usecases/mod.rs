mod delete_event;
mod display_names;
mod error;
mod nearby_events;
mod partition_events;
mod places;
mod query_events;
mod reviews;
mod store_event;
mod users;
mod validate_location;
mod wishlist;

#[cfg(test)]
pub mod tests;

pub use self::{
    delete_event::*,
    display_names::*,
    error::{Error, ErrorKind},
    nearby_events::*,
    partition_events::*,
    places::*,
    query_events::*,
    reviews::*,
    store_event::*,
    users::*,
    validate_location::*,
    wishlist::*,
};

mod prelude {
    pub use super::error::{category_not_found, event_not_found, place_not_found, Error};
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        entities::{
            category::*, event::*, geo::*, geometry::*, id::*, place::*, rating::*, review::*,
            time::*, user::*,
        },
        repositories::*,
    };
}
use self::prelude::*;

pub fn get_event<R: EventRepo>(repo: &R, id: &str) -> Result<Event> {
    repo.get_event(id).map_err(event_not_found)
}

#[macro_use]
extern crate log;

mod create_event;
mod delete_event;
mod import_places;
mod query_events;
mod reviews;
mod update_event;
mod users;
mod wishlist;

pub mod prelude {
    pub use super::{
        create_event::*, delete_event::*, import_places::*, query_events::*, reviews::*,
        update_event::*, users::*, wishlist::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use dalmatia_core::{
    entities::{category::*, event::*, geo::*, id::Id, place::*, rating::*, review::*, time::*, user::*},
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use dalmatia_db_sqlite::Connections;
}

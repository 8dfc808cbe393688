use anyhow::anyhow;
use diesel::{
    self,
    prelude::{Connection as DieselConnection, *},
    result::{DatabaseErrorKind, Error as DieselError},
};

use dalmatia_boundary as json;
use dalmatia_core::{
    entities::{
        category::*, event::*, geo::*, geometry::Boundary, id::Id, place::*, rating::*,
        review::*, time::Timestamp, user::*,
    },
    repositories::{self as repo, *},
};

use super::*;

mod category;
mod event;
mod place;
mod review;
mod user;
mod wishlist;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

fn load_timestamp_secs(secs: i64) -> Result<Timestamp> {
    Timestamp::try_from_secs(secs).ok_or_else(|| anyhow!("Invalid timestamp: {secs}").into())
}

fn load_timestamp_millis(millis: i64) -> Result<Timestamp> {
    Timestamp::try_from_millis(millis)
        .ok_or_else(|| anyhow!("Invalid timestamp: {millis} ms").into())
}

// All repositories are implemented uniformly for every kind of
// connection. Modifications through a read-only connection fail.
macro_rules! impl_repositories {
    ($($db:ty),+ $(,)?) => { $(
        impl PlaceRepo for $db {
            fn create_place(&self, place: Place) -> Result<()> {
                place::create_place(&mut *self.write_conn()?, place)
            }
            fn update_place(&self, place: &Place) -> Result<()> {
                place::update_place(&mut *self.write_conn()?, place)
            }
            fn get_place(&self, id: &str) -> Result<Place> {
                place::get_place(&mut self.read_conn(), id)
            }
            fn try_get_place_by_name(&self, name: &str) -> Result<Option<Place>> {
                place::try_get_place_by_name(&mut self.read_conn(), name)
            }
            fn all_places(&self) -> Result<Vec<Place>> {
                place::all_places(&mut self.read_conn())
            }
            fn all_place_names(&self) -> Result<Vec<(Id, String)>> {
                place::all_place_names(&mut self.read_conn())
            }
            fn count_places(&self) -> Result<usize> {
                place::count_places(&mut self.read_conn())
            }
        }

        impl CategoryRepo for $db {
            fn create_category(&self, category: Category) -> Result<()> {
                category::create_category(&mut *self.write_conn()?, category)
            }
            fn get_category(&self, id: &str) -> Result<Category> {
                category::get_category(&mut self.read_conn(), id)
            }
            fn all_categories(&self) -> Result<Vec<Category>> {
                category::all_categories(&mut self.read_conn())
            }
        }

        impl EventRepo for $db {
            fn create_event(&self, ev: Event) -> Result<()> {
                event::create_event(&mut *self.write_conn()?, ev)
            }
            fn update_event(&self, ev: &Event) -> Result<()> {
                event::update_event(&mut *self.write_conn()?, ev)
            }
            fn delete_event(&self, id: &str) -> Result<()> {
                event::delete_event(&mut *self.write_conn()?, id)
            }
            fn get_event(&self, id: &str) -> Result<Event> {
                event::get_event(&mut self.read_conn(), id)
            }
            fn get_events_chronologically(&self, ids: &[&str]) -> Result<Vec<Event>> {
                event::get_events_chronologically(&mut self.read_conn(), ids)
            }
            fn all_events_chronologically(&self) -> Result<Vec<Event>> {
                event::filter_events_chronologically(&mut self.read_conn(), &EventFilter::default())
            }
            fn filter_events_chronologically(&self, filter: &EventFilter) -> Result<Vec<Event>> {
                event::filter_events_chronologically(&mut self.read_conn(), filter)
            }
            fn count_events(&self) -> Result<usize> {
                event::count_events(&mut self.read_conn())
            }
            fn recalculate_event_rating(&self, id: &str) -> Result<RatingSummary> {
                event::recalculate_event_rating(&mut *self.write_conn()?, id)
            }
        }

        impl ReviewRepo for $db {
            fn create_review(&self, review: Review) -> Result<()> {
                review::create_review(&mut *self.write_conn()?, review)
            }
            fn update_review(&self, review: &Review) -> Result<()> {
                review::update_review(&mut *self.write_conn()?, review)
            }
            fn delete_review(&self, event_id: &str, user_id: &str) -> Result<()> {
                review::delete_review(&mut *self.write_conn()?, event_id, user_id)
            }
            fn try_get_review(&self, event_id: &str, user_id: &str) -> Result<Option<Review>> {
                review::try_get_review(&mut self.read_conn(), event_id, user_id)
            }
            fn load_reviews_of_event(&self, event_id: &str) -> Result<Vec<Review>> {
                review::load_reviews_of_event(&mut self.read_conn(), event_id)
            }
        }

        impl WishlistRepo for $db {
            fn add_to_wishlist(&self, user_id: &str, event_id: &str) -> Result<()> {
                wishlist::add_to_wishlist(&mut *self.write_conn()?, user_id, event_id)
            }
            fn remove_from_wishlist(&self, user_id: &str, event_id: &str) -> Result<bool> {
                wishlist::remove_from_wishlist(&mut *self.write_conn()?, user_id, event_id)
            }
            fn load_wishlist_event_ids(&self, user_id: &str) -> Result<Vec<Id>> {
                wishlist::load_wishlist_event_ids(&mut self.read_conn(), user_id)
            }
        }

        impl UserRepo for $db {
            fn create_user(&self, u: &User) -> Result<()> {
                user::create_user(&mut *self.write_conn()?, u)
            }
            fn get_user(&self, id: &str) -> Result<User> {
                user::get_user(&mut self.read_conn(), id)
            }
            fn try_get_user_by_username(&self, username: &str) -> Result<Option<User>> {
                user::try_get_user_by_username(&mut self.read_conn(), username)
            }
            fn try_get_user_by_email(&self, email: &str) -> Result<Option<User>> {
                user::try_get_user_by_email(&mut self.read_conn(), email)
            }
        }
    )+ };
}

impl_repositories!(DbReadOnly<'_>, DbReadWrite<'_>, DbConnection<'_>);

#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # dalmatia-entities
//!
//! Reusable, agnostic domain entities for Dalmatia Events.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod category;
pub mod event;
pub mod geo;
pub mod geometry;
pub mod id;
pub mod password;
pub mod place;
pub mod rating;
pub mod review;
pub mod time;
pub mod user;
pub mod wishlist;
pub mod url {
    pub use url::{ParseError, Url};
}

#[cfg(any(test, feature = "builders"))]
pub mod builders;

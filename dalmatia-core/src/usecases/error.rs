use thiserror::Error;

use crate::{
    repositories,
    util::validate::{EventInvalidation, OrganizerInvalidation},
};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The title is invalid")]
    Title,
    #[error("Invalid email address")]
    Email,
    #[error("Incomplete organizer")]
    Organizer,
    #[error("Invalid price")]
    Price,
    #[error("The end date is before the start")]
    EndDateBeforeStart,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid radius")]
    InvalidRadius,
    #[error("Invalid date")]
    InvalidTimestamp,
    #[error("Missing parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("Invalid URL")]
    Url,
    #[error("Rating value out of range")]
    RatingValue,
    #[error("Invalid password")]
    Password,
    #[error("Invalid username")]
    Username,
    #[error("Invalid boundary")]
    Boundary,
    #[error("Invalid place name")]
    PlaceName,
    #[error("Invalid category name")]
    CategoryName,
    #[error("The place does not exist")]
    PlaceNotFound,
    #[error("The event does not exist")]
    EventNotFound,
    #[error("The review does not exist")]
    ReviewNotFound,
    #[error("The category does not exist")]
    CategoryNotFound,
    #[error("The event has already been reviewed by this user")]
    ReviewExists,
    #[error("The location is outside of the boundary of the place")]
    LocationOutsidePlace,
    #[error("The event is already on the wishlist")]
    AlreadyInWishlist,
    #[error("The user already exists")]
    UserExists,
    #[error("The event has already started")]
    EventAlreadyStarted,
    #[error("This is not allowed")]
    Forbidden,
    #[error("This is not allowed without auth")]
    Unauthorized,
    #[error("Invalid credentials")]
    Credentials,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

/// Coarse classification of errors, e.g. for mapping them
/// onto response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    NotFound,
    Conflict,
    Unauthorized,
    Forbidden,
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        use Error as E;
        match self {
            E::Title
            | E::Email
            | E::Organizer
            | E::Price
            | E::EndDateBeforeStart
            | E::InvalidPosition
            | E::InvalidRadius
            | E::InvalidTimestamp
            | E::MissingParameter(_)
            | E::Url
            | E::RatingValue
            | E::Password
            | E::Username
            | E::Boundary
            | E::PlaceName
            | E::CategoryName
            | E::EventAlreadyStarted => ErrorKind::BadRequest,
            E::PlaceNotFound
            | E::EventNotFound
            | E::ReviewNotFound
            | E::CategoryNotFound
            | E::Repo(repositories::Error::NotFound) => ErrorKind::NotFound,
            E::ReviewExists
            | E::LocationOutsidePlace
            | E::AlreadyInWishlist
            | E::UserExists
            | E::Repo(repositories::Error::AlreadyExists) => ErrorKind::Conflict,
            E::Unauthorized | E::Credentials => ErrorKind::Unauthorized,
            E::Forbidden => ErrorKind::Forbidden,
            E::Repo(_) => ErrorKind::Internal,
        }
    }
}

pub fn event_not_found(err: repositories::Error) -> Error {
    match err {
        repositories::Error::NotFound => Error::EventNotFound,
        err => Error::Repo(err),
    }
}

pub fn place_not_found(err: repositories::Error) -> Error {
    match err {
        repositories::Error::NotFound => Error::PlaceNotFound,
        err => Error::Repo(err),
    }
}

pub fn category_not_found(err: repositories::Error) -> Error {
    match err {
        repositories::Error::NotFound => Error::CategoryNotFound,
        err => Error::Repo(err),
    }
}

impl From<dalmatia_entities::password::ParseError> for Error {
    fn from(_: dalmatia_entities::password::ParseError) -> Self {
        Self::Password
    }
}

impl From<dalmatia_entities::url::ParseError> for Error {
    fn from(_: dalmatia_entities::url::ParseError) -> Self {
        Self::Url
    }
}

impl From<dalmatia_entities::geometry::GeometryError> for Error {
    fn from(_: dalmatia_entities::geometry::GeometryError) -> Self {
        Self::Boundary
    }
}

impl From<EventInvalidation> for Error {
    fn from(err: EventInvalidation) -> Self {
        match err {
            EventInvalidation::Title => Self::Title,
            EventInvalidation::EndDateBeforeStart => Self::EndDateBeforeStart,
            EventInvalidation::Price => Self::Price,
            EventInvalidation::Position => Self::InvalidPosition,
            EventInvalidation::Organizer(err) => err.into(),
        }
    }
}

impl From<OrganizerInvalidation> for Error {
    fn from(err: OrganizerInvalidation) -> Self {
        match err {
            OrganizerInvalidation::Email => Self::Email,
            OrganizerInvalidation::Name
            | OrganizerInvalidation::Surname
            | OrganizerInvalidation::Phone => Self::Organizer,
        }
    }
}

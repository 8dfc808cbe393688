use crate::{geo::MapPoint, id::Id, rating::RatingSummary, time::Timestamp, url::Url};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Organizer {
    pub name    : String,
    pub surname : String,
    pub email   : String,
    pub phone   : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id          : Id,
    pub title       : String,
    pub description : Option<String>,
    pub place_id    : Id,
    pub category_id : Id,
    pub price       : f64,
    // Both start/end time stamps are stored with second precision!
    pub start       : Timestamp,
    pub end         : Timestamp,
    pub pos         : MapPoint,
    pub organizer   : Organizer,
    pub image_url   : Option<Url>,
    pub created_by  : Id,
    pub rating      : RatingSummary,
}

impl Event {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        &self.created_by == user_id
    }

    pub fn has_started(&self, now: Timestamp) -> bool {
        self.start <= now
    }

    pub fn has_ended(&self, now: Timestamp) -> bool {
        self.end < now
    }
}

/// An event together with the names of its place and category.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedEvent {
    pub event: Event,
    pub place_name: String,
    pub category_name: String,
}

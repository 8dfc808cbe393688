use serde::{Deserialize, Serialize};

#[cfg(feature = "entity-conversions")]
mod conv;

pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// GeoJSON geometry.
///
/// Positions are `[longitude, latitude]` in WGS 84.
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq))]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    Point(Vec<f64>),
    Polygon(Vec<Vec<Vec<f64>>>),
    MultiPolygon(Vec<Vec<Vec<Vec<f64>>>>),
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(tag = "type")]
pub struct Feature {
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<JsonObject>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(tag = "type")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct Event {
    pub id                : String,
    pub title             : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description       : Option<String>,
    pub place_id          : String,
    pub place_name        : String,
    pub category_id       : String,
    pub category_name     : String,
    pub price             : f64,
    pub date_start        : i64,
    pub date_end          : i64,
    pub location_point    : Geometry,
    pub organizer_name    : String,
    pub organizer_surname : String,
    pub organizer_email   : String,
    pub organizer_phone   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url         : Option<String>,
    pub average_rating    : f64,
    pub reviews_count     : u32,
    pub created_by        : String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct EventWithDistance {
    #[serde(flatten)]
    pub event: Event,
    /// Great-circle distance in meters
    pub distance: f64,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct NewEvent {
    pub title             : String,
    #[serde(default)]
    pub description       : Option<String>,
    pub place_id          : String,
    pub category_id       : String,
    pub price             : f64,
    pub date_start        : i64,
    pub date_end          : i64,
    pub latitude          : f64,
    pub longitude         : f64,
    pub organizer_name    : String,
    pub organizer_surname : String,
    pub organizer_email   : String,
    pub organizer_phone   : String,
    #[serde(default)]
    pub image_url         : Option<String>,
}

#[rustfmt::skip]
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(default)]
pub struct EventUpdate {
    pub title             : Option<String>,
    pub description       : Option<String>,
    pub place_id          : Option<String>,
    pub category_id       : Option<String>,
    pub price             : Option<f64>,
    pub date_start        : Option<i64>,
    pub date_end          : Option<i64>,
    pub latitude          : Option<f64>,
    pub longitude         : Option<f64>,
    pub organizer_name    : Option<String>,
    pub organizer_surname : Option<String>,
    pub organizer_email   : Option<String>,
    pub organizer_phone   : Option<String>,
    pub image_url         : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct PartitionedEvents {
    pub past: Vec<Event>,
    pub current: Vec<Event>,
    pub future: Vec<Event>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq, Eq))]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub county_id: u32,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq, Eq))]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq, Eq))]
pub struct Review {
    pub event_id: String,
    pub user_id: String,
    pub username: String,
    pub rating: i8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Milliseconds since the Unix epoch
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct NewReview {
    pub event_id: String,
    pub rating: i64,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
#[serde(default)]
pub struct ReviewUpdate {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone, PartialEq, Eq))]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct JwtToken {
    pub token: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct RegisteredUser {
    pub token: String,
    pub user: User,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct Message {
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "extra-derive"), derive(Debug, Clone))]
pub struct Error {
    /// The HTTP status code of the error.
    pub http_status: u16,
    /// A human-readable error message.
    pub message: String,
}

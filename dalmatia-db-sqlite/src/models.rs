#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// Event dates are stored as unix timestamps in seconds,
// all timestamps with the `_at` postfix in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub id: &'a str,
    pub username: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Queryable)]
pub struct UserEntity {
    pub rowid: i64,
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = places)]
pub struct NewPlace {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub county_id: i64,
    pub boundary: String,
}

#[derive(Queryable)]
pub struct PlaceEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
    pub kind: String,
    pub county_id: i64,
    pub boundary: String,
}

#[derive(Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct CategoryEntity {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

// The denormalized rating columns are only
// written when recalculating the rating.
#[derive(Insertable, AsChangeset)]
#[diesel(table_name = events)]
#[diesel(treat_none_as_null = true)]
pub struct NewEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub place_id: String,
    pub category_id: String,
    pub price: f64,
    pub date_start: i64,
    pub date_end: i64,
    pub lat: f64,
    pub lng: f64,
    pub organizer_name: String,
    pub organizer_surname: String,
    pub organizer_email: String,
    pub organizer_phone: String,
    pub image_url: Option<String>,
    pub created_by: String,
}

#[derive(Queryable)]
pub struct EventEntity {
    pub rowid: i64,
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub place_id: String,
    pub category_id: String,
    pub price: f64,
    pub date_start: i64,
    pub date_end: i64,
    pub lat: f64,
    pub lng: f64,
    pub organizer_name: String,
    pub organizer_surname: String,
    pub organizer_email: String,
    pub organizer_phone: String,
    pub image_url: Option<String>,
    pub created_by: String,
    pub average_rating: f64,
    pub reviews_count: i64,
}

#[derive(Queryable, Insertable, AsChangeset)]
#[diesel(table_name = reviews)]
#[diesel(treat_none_as_null = true)]
pub struct Review {
    pub event_id: String,
    pub user_id: String,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = wishlist)]
pub struct NewWishlistEntry<'a> {
    pub user_id: &'a str,
    pub event_id: &'a str,
}

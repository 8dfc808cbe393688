use std::{fmt::Display, result};

use dalmatia_application::prelude as flows;
use dalmatia_boundary::{Error as JsonErrorResponse, Message};
use dalmatia_core::{entities::id::Id, usecases};
use dalmatia_db_sqlite::Connections;
use rocket::serde::json::{Error as JsonError, Json};
use rocket::{
    self, delete, get,
    http::Status,
    post, put,
    response::{self, Responder},
    routes, Route, State,
};

use super::guards::*;
use crate::{
    adapters::json::{self, from_json, to_json},
    web::jwt,
};

mod error;
mod events;
mod places;
mod reviews;
mod users;
mod wishlist;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   events   --- //
        events::get_events,
        events::get_nearby_events,
        events::get_my_events,
        events::get_event,
        events::post_event,
        events::put_event,
        events::delete_event,
        // ---   places   --- //
        places::get_places,
        places::get_place_boundaries,
        places::get_categories,
        // ---   reviews   --- //
        reviews::get_reviews_of_event,
        reviews::post_review,
        reviews::put_review,
        reviews::delete_review,
        // ---   wishlist   --- //
        wishlist::get_wishlist,
        wishlist::post_wishlist_entry,
        wishlist::delete_wishlist_entry,
        // ---   users   --- //
        users::post_register,
        users::post_login,
    ]
}

fn message(msg: &str) -> Json<Message> {
    Json(Message {
        message: msg.to_string(),
    })
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

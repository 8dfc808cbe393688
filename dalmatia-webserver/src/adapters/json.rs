pub use dalmatia_boundary::*;

use dalmatia_core::{entities as e, usecases};

pub mod from_json {
    //! JSON -> use case parameters

    use super::*;

    // NOTE:
    // We cannot impl From<T> here, because the JSON structs
    // and the use case parameters both are outside this crate.

    pub fn new_event(from: NewEvent) -> usecases::NewEvent {
        let NewEvent {
            title,
            description,
            place_id,
            category_id,
            price,
            date_start,
            date_end,
            latitude,
            longitude,
            organizer_name,
            organizer_surname,
            organizer_email,
            organizer_phone,
            image_url,
        } = from;
        usecases::NewEvent {
            title,
            description,
            place_id,
            category_id,
            price,
            start: date_start,
            end: date_end,
            lat: latitude,
            lng: longitude,
            organizer_name,
            organizer_surname,
            organizer_email,
            organizer_phone,
            image_url,
        }
    }

    pub fn event_update(from: EventUpdate) -> usecases::EventUpdate {
        let EventUpdate {
            title,
            description,
            place_id,
            category_id,
            price,
            date_start,
            date_end,
            latitude,
            longitude,
            organizer_name,
            organizer_surname,
            organizer_email,
            organizer_phone,
            image_url,
        } = from;
        usecases::EventUpdate {
            title,
            description,
            place_id,
            category_id,
            price,
            start: date_start,
            end: date_end,
            lat: latitude,
            lng: longitude,
            organizer_name,
            organizer_surname,
            organizer_email,
            organizer_phone,
            image_url,
        }
    }

    pub fn new_review(from: NewReview) -> usecases::NewReview {
        let NewReview {
            event_id,
            rating,
            comment,
        } = from;
        usecases::NewReview {
            event_id,
            rating,
            comment,
        }
    }

    pub fn review_update(from: ReviewUpdate) -> usecases::ReviewUpdate {
        let ReviewUpdate { rating, comment } = from;
        usecases::ReviewUpdate { rating, comment }
    }

    pub fn new_user(from: NewUser) -> usecases::NewUser {
        let NewUser {
            username,
            email,
            password,
        } = from;
        usecases::NewUser {
            username,
            email,
            password,
        }
    }

    pub fn credentials(from: &Credentials) -> usecases::Credentials<'_> {
        usecases::Credentials {
            username: &from.username,
            password: &from.password,
        }
    }
}

pub mod to_json {
    //! Entity -> JSON

    use super::*;

    pub fn events(from: Vec<e::event::NamedEvent>) -> Vec<Event> {
        from.into_iter().map(Event::from).collect()
    }

    pub fn review(review: e::review::Review, username: &str) -> Review {
        e::review::ReviewWithAuthor {
            review,
            username: username.to_owned(),
        }
        .into()
    }

    pub fn partitioned_events(
        from: usecases::PartitionedEvents<e::event::NamedEvent>,
    ) -> PartitionedEvents {
        let usecases::PartitionedEvents {
            past,
            current,
            future,
        } = from;
        PartitionedEvents {
            past: events(past),
            current: events(current),
            future: events(future),
        }
    }
}

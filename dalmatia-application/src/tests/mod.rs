use serde_json::json;

use super::{error::AppError, prelude as flows, *};
use dalmatia_boundary as boundary;
use dalmatia_core::usecases::{Error as UsecaseError, ErrorKind};
use dalmatia_db_sqlite::run_embedded_database_migrations;

pub struct BackendFixture {
    pub db_connections: sqlite::Connections,
}

impl BackendFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
        run_embedded_database_migrations(db_connections.exclusive().unwrap()).unwrap();
        Self { db_connections }
    }

    pub fn register_user(&self, username: &str) -> User {
        flows::register_user(
            &self.db_connections,
            usecases::NewUser {
                username: username.into(),
                email: format!("{username}@example.com"),
                password: "secret123".into(),
            },
        )
        .unwrap()
    }

    pub fn import_places(&self, collection: serde_json::Value) -> usecases::ImportSummary {
        let collection: boundary::FeatureCollection = serde_json::from_value(collection).unwrap();
        flows::import_places(&self.db_connections, &collection, &counties()).unwrap()
    }

    pub fn place_by_name(&self, name: &str) -> Place {
        flows::load_places(&self.db_connections)
            .unwrap()
            .into_iter()
            .find(|p| p.name == name)
            .unwrap()
    }

    pub fn create_category(&self, name: &str) -> Category {
        flows::create_category(&self.db_connections, name).unwrap()
    }
}

pub fn counties() -> flows::CountyMap {
    [
        ("Zadarska", 1),
        ("Šibensko-Kninska", 2),
        ("Splitsko-Dalmatinska", 3),
        ("Dubrovacko-Neretvanska", 4),
    ]
    .into_iter()
    .map(|(name, id)| (name.to_owned(), id))
    .collect()
}

fn rect_feature(name: &str, county: &str, kind: &str, sw: (f64, f64), ne: (f64, f64)) -> serde_json::Value {
    let ((sw_lat, sw_lng), (ne_lat, ne_lng)) = (sw, ne);
    json!({
        "type": "Feature",
        "properties": { "NAME_1": county, "NAME_2": name, "ENGTYPE_2": kind },
        "geometry": {
            "type": "Polygon",
            "coordinates": [[
                [sw_lng, sw_lat], [ne_lng, sw_lat], [ne_lng, ne_lat], [sw_lng, ne_lat], [sw_lng, sw_lat]
            ]]
        }
    })
}

fn dalmatia() -> serde_json::Value {
    json!({
        "type": "FeatureCollection",
        "features": [
            rect_feature("Split", "Splitsko-Dalmatinska", "City", (43.49, 16.38), (43.55, 16.52)),
            rect_feature("Trogir", "Splitsko-Dalmatinska", "Town", (43.50, 16.20), (43.54, 16.27)),
            rect_feature("Zadar", "Zadarska", "City", (44.08, 15.18), (44.16, 15.30)),
            rect_feature("Mostar", "Hercegovačko-neretvanska", "City", (43.30, 17.75), (43.40, 17.85)),
        ]
    })
}

fn new_event(place_id: &str, category_id: &str, start: Timestamp, lat: f64, lng: f64) -> usecases::NewEvent {
    usecases::NewEvent {
        title: "Klapa concert".into(),
        description: Some("Traditional a cappella singing".into()),
        place_id: place_id.into(),
        category_id: category_id.into(),
        price: 10.0,
        start: start.as_secs(),
        end: (start + Duration::hours(2)).as_secs(),
        lat,
        lng,
        organizer_name: "Ivana".into(),
        organizer_surname: "Horvat".into(),
        organizer_email: "ivana@example.com".into(),
        organizer_phone: "+385 21 123456".into(),
        image_url: None,
    }
}

fn usecase_error(err: AppError) -> UsecaseError {
    match err {
        AppError::Usecase(err) => err,
        err => panic!("Unexpected error: {err}"),
    }
}

#[test]
fn import_places_from_feature_collection() {
    let fixture = BackendFixture::new();
    let summary = fixture.import_places(dalmatia());
    assert_eq!(3, summary.created);
    assert_eq!(0, summary.updated);
    // Mostar is not in a configured county
    assert_eq!(1, summary.skipped);

    let split = fixture.place_by_name("Split");
    assert_eq!(PlaceKind::City, split.kind);
    assert_eq!(3, split.county_id);
    assert_eq!(PlaceKind::Municipality, fixture.place_by_name("Trogir").kind);
    assert_eq!(1, fixture.place_by_name("Zadar").county_id);

    // Re-importing updates the existing places and keeps their ids
    let summary = fixture.import_places(dalmatia());
    assert_eq!(0, summary.created);
    assert_eq!(3, summary.updated);
    assert_eq!(split.id, fixture.place_by_name("Split").id);
}

#[test]
fn import_skips_invalid_features() {
    let fixture = BackendFixture::new();
    let summary = fixture.import_places(json!({
        "type": "FeatureCollection",
        "features": [
            { "type": "Feature", "properties": { "NAME_1": "Zadarska" }, "geometry": null },
            {
                "type": "Feature",
                "properties": { "NAME_1": "Zadarska", "NAME_2": "Nin" },
                "geometry": { "type": "Point", "coordinates": [15.18, 44.24] }
            },
            {
                "type": "Feature",
                "properties": { "NAME_1": "Zadarska", "NAME_2": "Pag" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[15.0, 44.4], [15.1, 44.4], [15.0, 44.4]]]
                }
            },
        ]
    }));
    assert_eq!(0, summary.created);
    assert_eq!(3, summary.skipped);
}

#[test]
fn import_places_from_invalid_json() {
    let fixture = BackendFixture::new();
    let err = flows::import_places_from_reader(
        &fixture.db_connections,
        "{ not json".as_bytes(),
        &counties(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Serialize(_)));
    assert_eq!(ErrorKind::BadRequest, err.kind());
}

#[test]
fn load_place_boundaries_as_feature_collection() {
    let fixture = BackendFixture::new();
    fixture.import_places(dalmatia());
    let collection = flows::load_place_boundaries(&fixture.db_connections).unwrap();
    let json = serde_json::to_value(&collection).unwrap();
    assert_eq!("FeatureCollection", json["type"]);
    let names: Vec<_> = json["features"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["properties"]["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(vec!["Split", "Trogir", "Zadar"], names);
}

#[test]
fn create_event_within_place() {
    let fixture = BackendFixture::new();
    fixture.import_places(dalmatia());
    let split = fixture.place_by_name("Split");
    let music = fixture.create_category("Music");
    let alice = fixture.register_user("alice");
    let start = Timestamp::now().truncate_to_secs() + Duration::days(3);

    let event = flows::create_event(
        &fixture.db_connections,
        &alice.id,
        new_event(split.id.as_str(), music.id.as_str(), start, 43.5081, 16.4402),
    )
    .unwrap();
    let stored = flows::get_event(&fixture.db_connections, event.id.as_str()).unwrap();
    assert_eq!(event, stored.event);
    assert_eq!("Split", stored.place_name);
    assert_eq!("Music", stored.category_name);
    assert!(event.is_owned_by(&alice.id));

    // Zadar is far outside of Split
    let err = flows::create_event(
        &fixture.db_connections,
        &alice.id,
        new_event(split.id.as_str(), music.id.as_str(), start, 44.1194, 15.2314),
    )
    .unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::LocationOutsidePlace));

    let err = flows::create_event(
        &fixture.db_connections,
        &alice.id,
        new_event(split.id.as_str(), "unknown", start, 43.5081, 16.4402),
    )
    .unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::CategoryNotFound));
}

#[test]
fn query_nearby_and_within_place() {
    let fixture = BackendFixture::new();
    fixture.import_places(dalmatia());
    let split = fixture.place_by_name("Split");
    let trogir = fixture.place_by_name("Trogir");
    let zadar = fixture.place_by_name("Zadar");
    let music = fixture.create_category("Music");
    let alice = fixture.register_user("alice");
    let start = Timestamp::now().truncate_to_secs() + Duration::days(3);
    let create = |place: &Place, lat, lng| {
        flows::create_event(
            &fixture.db_connections,
            &alice.id,
            new_event(place.id.as_str(), music.id.as_str(), start, lat, lng),
        )
        .unwrap()
    };
    let in_split = create(&split, 43.5081, 16.4402);
    let in_trogir = create(&trogir, 43.5170, 16.2510);
    let in_zadar = create(&zadar, 44.1194, 15.2314);

    let events = flows::query_events(
        &fixture.db_connections,
        usecases::EventQuery {
            place_id: Some(split.id.clone()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(vec![in_split.id.clone()], events.into_iter().map(|e| e.event.id).collect::<Vec<_>>());

    let nearby = flows::nearby_events(
        &fixture.db_connections,
        usecases::NearbyQuery {
            center: MapPoint::from_lat_lng_deg(43.5081, 16.4402),
            radius: Distance::from_meters(20_000.0),
        },
    )
    .unwrap();
    let ids: Vec<_> = nearby.iter().map(|(e, _)| e.event.id.clone()).collect();
    assert_eq!("Trogir", nearby[1].0.place_name);
    assert_eq!(vec![in_split.id, in_trogir.id], ids);
    assert!(nearby[0].1.to_meters() < 1.0);
    assert!(!ids.contains(&in_zadar.id));
}

#[test]
fn only_owners_may_modify_events() {
    let fixture = BackendFixture::new();
    fixture.import_places(dalmatia());
    let split = fixture.place_by_name("Split");
    let music = fixture.create_category("Music");
    let alice = fixture.register_user("alice");
    let bob = fixture.register_user("bob");
    let start = Timestamp::now().truncate_to_secs() + Duration::days(3);
    let event = flows::create_event(
        &fixture.db_connections,
        &alice.id,
        new_event(split.id.as_str(), music.id.as_str(), start, 43.5081, 16.4402),
    )
    .unwrap();

    let update = usecases::EventUpdate {
        title: Some("Sunset concert".into()),
        ..Default::default()
    };
    let err = flows::update_event(&fixture.db_connections, &bob.id, event.id.as_str(), update.clone())
        .unwrap_err();
    assert_eq!(ErrorKind::Forbidden, err.kind());
    let updated =
        flows::update_event(&fixture.db_connections, &alice.id, event.id.as_str(), update).unwrap();
    assert_eq!("Sunset concert", updated.title);
    assert_eq!(event.pos, updated.pos);

    // Moving the event out of its place is rejected
    let err = flows::update_event(
        &fixture.db_connections,
        &alice.id,
        event.id.as_str(),
        usecases::EventUpdate {
            lat: Some(44.1194),
            lng: Some(15.2314),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::LocationOutsidePlace));

    let err = flows::delete_event(&fixture.db_connections, &bob.id, event.id.as_str()).unwrap_err();
    assert_eq!(ErrorKind::Forbidden, err.kind());
    flows::delete_event(&fixture.db_connections, &alice.id, event.id.as_str()).unwrap();
    let err = flows::get_event(&fixture.db_connections, event.id.as_str()).unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::EventNotFound));
}

#[test]
fn reviews_keep_the_rating_in_sync() {
    let fixture = BackendFixture::new();
    fixture.import_places(dalmatia());
    let split = fixture.place_by_name("Split");
    let music = fixture.create_category("Music");
    let users: Vec<_> = ["alice", "bob", "carol"]
        .into_iter()
        .map(|name| fixture.register_user(name))
        .collect();
    let start = Timestamp::now().truncate_to_secs() + Duration::days(3);
    let event = flows::create_event(
        &fixture.db_connections,
        &users[0].id,
        new_event(split.id.as_str(), music.id.as_str(), start, 43.5081, 16.4402),
    )
    .unwrap();

    for (user, rating) in users.iter().zip([5, 3, 4]) {
        flows::add_review(
            &fixture.db_connections,
            &user.id,
            usecases::NewReview {
                event_id: event.id.to_string(),
                rating,
                comment: None,
            },
        )
        .unwrap();
    }
    let rating = flows::get_event(&fixture.db_connections, event.id.as_str())
        .unwrap()
        .event
        .rating;
    assert_eq!(4.0, f64::from(rating.average));
    assert_eq!(3, rating.count);

    let err = flows::add_review(
        &fixture.db_connections,
        &users[0].id,
        usecases::NewReview {
            event_id: event.id.to_string(),
            rating: 1,
            comment: None,
        },
    )
    .unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::ReviewExists));

    let rating =
        flows::delete_review(&fixture.db_connections, &users[1].id, event.id.as_str()).unwrap();
    assert_eq!(4.5, f64::from(rating.average));
    assert_eq!(2, rating.count);

    let (_, rating) = flows::update_review(
        &fixture.db_connections,
        &users[2].id,
        event.id.as_str(),
        usecases::ReviewUpdate {
            rating: Some(1),
            comment: Some("Too crowded".into()),
        },
    )
    .unwrap();
    assert_eq!(3.0, f64::from(rating.average));
    let reviews = flows::load_reviews_of_event(&fixture.db_connections, event.id.as_str()).unwrap();
    assert_eq!(2, reviews.len());
    let mut authors: Vec<_> = reviews.iter().map(|r| r.username.as_str()).collect();
    authors.sort_unstable();
    assert_eq!(vec!["alice", "carol"], authors);
}

#[test]
fn wishlist_and_my_events() {
    let fixture = BackendFixture::new();
    fixture.import_places(dalmatia());
    let split = fixture.place_by_name("Split");
    let music = fixture.create_category("Music");
    let alice = fixture.register_user("alice");
    let bob = fixture.register_user("bob");
    let start = Timestamp::now().truncate_to_secs() + Duration::days(3);
    let event = flows::create_event(
        &fixture.db_connections,
        &alice.id,
        new_event(split.id.as_str(), music.id.as_str(), start, 43.5081, 16.4402),
    )
    .unwrap();

    flows::add_to_wishlist(&fixture.db_connections, &bob.id, event.id.as_str()).unwrap();
    let err = flows::add_to_wishlist(&fixture.db_connections, &bob.id, event.id.as_str())
        .unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::AlreadyInWishlist));
    assert_eq!(1, flows::load_wishlist(&fixture.db_connections, &bob.id).unwrap().len());
    assert!(flows::remove_from_wishlist(&fixture.db_connections, &bob.id, event.id.as_str()).unwrap());
    assert!(flows::load_wishlist(&fixture.db_connections, &bob.id).unwrap().is_empty());

    let mine = flows::my_events(&fixture.db_connections, &alice.id).unwrap();
    assert_eq!(1, mine.future.len());
    assert!(mine.past.is_empty() && mine.current.is_empty());
    assert!(flows::my_events(&fixture.db_connections, &bob.id).unwrap().is_empty());
}

#[test]
fn register_and_login() {
    let fixture = BackendFixture::new();
    let alice = fixture.register_user("alice");
    let err = flows::register_user(
        &fixture.db_connections,
        usecases::NewUser {
            username: "alice".into(),
            email: "other@example.com".into(),
            password: "secret123".into(),
        },
    )
    .unwrap_err();
    assert!(matches!(usecase_error(err), UsecaseError::UserExists));

    let user = flows::login(
        &fixture.db_connections,
        usecases::Credentials {
            username: "alice",
            password: "secret123",
        },
    )
    .unwrap();
    assert_eq!(alice.id, user.id);
    let err = flows::login(
        &fixture.db_connections,
        usecases::Credentials {
            username: "alice",
            password: "wrong-password",
        },
    )
    .unwrap_err();
    assert_eq!(ErrorKind::Unauthorized, err.kind());
    assert_eq!(alice, flows::get_user(&fixture.db_connections, alice.id.as_str()).unwrap());
}

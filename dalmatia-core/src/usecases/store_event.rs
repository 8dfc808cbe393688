use super::{prelude::*, validate_location::ensure_location_within_place};
use crate::util::{
    parse::parse_lazy_url,
    validate::{AutoCorrect, Validate},
};

#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct NewEvent {
    pub title             : String,
    pub description       : Option<String>,
    pub place_id          : String,
    pub category_id       : String,
    pub price             : f64,
    pub start             : i64,
    pub end               : i64,
    pub lat               : f64,
    pub lng               : f64,
    pub organizer_name    : String,
    pub organizer_surname : String,
    pub organizer_email   : String,
    pub organizer_phone   : String,
    pub image_url         : Option<String>,
}

/// Changes of an existing event, absent fields are kept.
#[rustfmt::skip]
#[derive(Default, Debug, Clone)]
pub struct EventUpdate {
    pub title             : Option<String>,
    pub description       : Option<String>,
    pub place_id          : Option<String>,
    pub category_id       : Option<String>,
    pub price             : Option<f64>,
    pub start             : Option<i64>,
    pub end               : Option<i64>,
    pub lat               : Option<f64>,
    pub lng               : Option<f64>,
    pub organizer_name    : Option<String>,
    pub organizer_surname : Option<String>,
    pub organizer_email   : Option<String>,
    pub organizer_phone   : Option<String>,
    pub image_url         : Option<String>,
}

pub enum NewEventMode<'a> {
    Create,
    Update(&'a Event),
}

/// A validated event that is ready to be stored.
#[derive(Debug, Clone)]
pub struct Storable(Event);

impl Storable {
    pub fn event(&self) -> &Event {
        &self.0
    }
}

pub fn import_new_event<R>(
    repo: &R,
    created_by: &Id,
    e: NewEvent,
    mode: NewEventMode,
) -> Result<Storable>
where
    R: PlaceRepo + CategoryRepo,
{
    let NewEvent {
        title,
        description,
        place_id,
        category_id,
        price,
        start,
        end,
        lat,
        lng,
        organizer_name,
        organizer_surname,
        organizer_email,
        organizer_phone,
        image_url,
    } = e;

    let start = Timestamp::try_from_secs(start).ok_or(Error::InvalidTimestamp)?;
    let end = Timestamp::try_from_secs(end).ok_or(Error::InvalidTimestamp)?;
    let image_url = image_url.map(parse_lazy_url).transpose()?.flatten();
    // Invalid positions are rejected during validation
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap_or_default();

    let (id, created_by, rating) = match mode {
        NewEventMode::Create => (Id::new(), created_by.clone(), RatingSummary::default()),
        NewEventMode::Update(old) => (old.id.clone(), old.created_by.clone(), old.rating),
    };

    let event = Event {
        id,
        title,
        description,
        place_id: place_id.trim().into(),
        category_id: category_id.trim().into(),
        price,
        start,
        end,
        pos,
        organizer: Organizer {
            name: organizer_name,
            surname: organizer_surname,
            email: organizer_email,
            phone: organizer_phone,
        },
        image_url,
        created_by,
        rating,
    };
    let event = event.auto_correct();
    event.validate()?;

    repo.get_category(event.category_id.as_str())
        .map_err(category_not_found)?;
    ensure_location_within_place(repo, event.place_id.as_str(), event.pos)?;

    Ok(Storable(event))
}

/// Loads the event and checks if the user is allowed to modify it.
///
/// Events can only be modified by their creator and only until they start.
pub fn prepare_event_update<R>(
    repo: &R,
    user_id: &Id,
    id: &str,
    update: EventUpdate,
    now: Timestamp,
) -> Result<Storable>
where
    R: EventRepo + PlaceRepo + CategoryRepo,
{
    let old = repo.get_event(id).map_err(event_not_found)?;
    if !old.is_owned_by(user_id) {
        log::warn!("User {user_id} is not allowed to modify event {id}");
        return Err(Error::Forbidden);
    }
    if old.has_started(now) {
        return Err(Error::EventAlreadyStarted);
    }
    let merged = merge_update(&old, update);
    import_new_event(repo, user_id, merged, NewEventMode::Update(&old))
}

fn merge_update(old: &Event, update: EventUpdate) -> NewEvent {
    let EventUpdate {
        title,
        description,
        place_id,
        category_id,
        price,
        start,
        end,
        lat,
        lng,
        organizer_name,
        organizer_surname,
        organizer_email,
        organizer_phone,
        image_url,
    } = update;
    let (old_lat, old_lng) = old.pos.to_lat_lng_deg();
    NewEvent {
        title: title.unwrap_or_else(|| old.title.clone()),
        description: description.or_else(|| old.description.clone()),
        place_id: place_id.unwrap_or_else(|| old.place_id.to_string()),
        category_id: category_id.unwrap_or_else(|| old.category_id.to_string()),
        price: price.unwrap_or(old.price),
        start: start.unwrap_or_else(|| old.start.as_secs()),
        end: end.unwrap_or_else(|| old.end.as_secs()),
        lat: lat.unwrap_or(old_lat),
        lng: lng.unwrap_or(old_lng),
        organizer_name: organizer_name.unwrap_or_else(|| old.organizer.name.clone()),
        organizer_surname: organizer_surname.unwrap_or_else(|| old.organizer.surname.clone()),
        organizer_email: organizer_email.unwrap_or_else(|| old.organizer.email.clone()),
        organizer_phone: organizer_phone.unwrap_or_else(|| old.organizer.phone.clone()),
        image_url: image_url.or_else(|| old.image_url.as_ref().map(ToString::to_string)),
    }
}

pub fn store_created_event<R>(repo: &R, storable: Storable) -> Result<Event>
where
    R: EventRepo,
{
    let Storable(event) = storable;
    log::debug!("Storing newly created event: {:?}", event);
    repo.create_event(event.clone())?;
    Ok(event)
}

pub fn store_updated_event<R>(repo: &R, storable: Storable) -> Result<Event>
where
    R: EventRepo,
{
    let Storable(event) = storable;
    log::debug!("Storing updated event: {:?}", event);
    repo.update_event(&event).map_err(event_not_found)?;
    Ok(event)
}

#[cfg(test)]
mod tests {

    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;
    use time::Duration;

    fn create_new_event<R>(repo: &R, created_by: &Id, e: NewEvent) -> Result<Event>
    where
        R: EventRepo + PlaceRepo + CategoryRepo,
    {
        let s = import_new_event(repo, created_by, e, NewEventMode::Create)?;
        store_created_event(repo, s)
    }

    fn update_event<R>(
        repo: &R,
        user_id: &Id,
        id: &str,
        update: EventUpdate,
        now: Timestamp,
    ) -> Result<Event>
    where
        R: EventRepo + PlaceRepo + CategoryRepo,
    {
        let s = prepare_event_update(repo, user_id, id, update, now)?;
        store_updated_event(repo, s)
    }

    fn setup() -> MockDb {
        let db = MockDb::default();
        db.create_place(
            Place::build()
                .id("split")
                .name("Split")
                .kind(PlaceKind::City)
                .county_id(3)
                .rect((43.49, 16.38), (43.55, 16.52))
                .finish(),
        )
        .unwrap();
        db.create_place(
            Place::build()
                .id("trogir")
                .name("Trogir")
                .kind(PlaceKind::City)
                .county_id(3)
                .rect((43.50, 16.22), (43.53, 16.27))
                .finish(),
        )
        .unwrap();
        db.create_category(Category {
            id: "music".into(),
            name: "Music".into(),
        })
        .unwrap();
        db
    }

    fn new_event(start: Timestamp) -> NewEvent {
        #[rustfmt::skip]
        let e = NewEvent {
            title             : "Klapa festival".into(),
            description       : Some("Traditional a cappella singing".into()),
            place_id          : "split".into(),
            category_id       : "music".into(),
            price             : 10.0,
            start             : start.as_secs(),
            end               : (start + Duration::hours(3)).as_secs(),
            lat               : 43.5081,
            lng               : 16.4402,
            organizer_name    : "Ivo".into(),
            organizer_surname : "Ivić".into(),
            organizer_email   : "ivo@klapa.hr".into(),
            organizer_phone   : "+385 21 123 456".into(),
            image_url         : Some("klapa.hr/poster.jpg".into()),
        };
        e
    }

    fn tomorrow() -> Timestamp {
        Timestamp::now().truncate_to_secs() + Duration::days(1)
    }

    #[test]
    fn create_new_valid_event() {
        let db = setup();
        let start = tomorrow();
        let alice = Id::from("alice");
        let id = create_new_event(&db, &alice, new_event(start)).unwrap().id;
        assert!(id.is_valid());
        assert_eq!(db.events.borrow().len(), 1);
        let x = &db.events.borrow()[0];
        assert_eq!(x.title, "Klapa festival");
        assert_eq!(x.start, start);
        assert_eq!(x.created_by, alice);
        assert_eq!(x.rating, RatingSummary::default());
        assert_eq!(
            "https://klapa.hr/poster.jpg",
            x.image_url.as_ref().unwrap().as_str()
        );
    }

    #[test]
    fn reject_invalid_fields() {
        let db = setup();
        let start = tomorrow();
        let alice = Id::from("alice");

        let mut e = new_event(start);
        e.title = " ".into();
        assert!(matches!(create_new_event(&db, &alice, e), Err(Error::Title)));

        let mut e = new_event(start);
        e.organizer_email = "ivo".into();
        assert!(matches!(create_new_event(&db, &alice, e), Err(Error::Email)));

        let mut e = new_event(start);
        e.organizer_phone = "".into();
        assert!(matches!(
            create_new_event(&db, &alice, e),
            Err(Error::Organizer)
        ));

        let mut e = new_event(start);
        e.price = -1.0;
        assert!(matches!(create_new_event(&db, &alice, e), Err(Error::Price)));

        let mut e = new_event(start);
        e.end = e.start - 1;
        assert!(matches!(
            create_new_event(&db, &alice, e),
            Err(Error::EndDateBeforeStart)
        ));

        let mut e = new_event(start);
        e.lat = 91.0;
        assert!(matches!(
            create_new_event(&db, &alice, e),
            Err(Error::InvalidPosition)
        ));

        let mut e = new_event(start);
        e.category_id = "sports".into();
        assert!(matches!(
            create_new_event(&db, &alice, e),
            Err(Error::CategoryNotFound)
        ));

        let mut e = new_event(start);
        e.place_id = "zadar".into();
        assert!(matches!(
            create_new_event(&db, &alice, e),
            Err(Error::PlaceNotFound)
        ));

        assert!(db.events.borrow().is_empty());
    }

    #[test]
    fn reject_location_outside_of_place() {
        let db = setup();
        let mut e = new_event(tomorrow());
        // Trogir instead of Split
        e.lat = 43.5147;
        e.lng = 16.2512;
        assert!(matches!(
            create_new_event(&db, &"alice".into(), e),
            Err(Error::LocationOutsidePlace)
        ));
        assert!(db.events.borrow().is_empty());
    }

    #[test]
    fn update_own_future_event() {
        let db = setup();
        let alice = Id::from("alice");
        let start = tomorrow();
        let created = create_new_event(&db, &alice, new_event(start)).unwrap();
        let update = EventUpdate {
            title: Some("Klapa festival 2026".into()),
            description: Some("".into()),
            image_url: Some("".into()),
            ..Default::default()
        };
        let updated = update_event(&db, &alice, created.id.as_str(), update, Timestamp::now())
            .unwrap();
        assert_eq!(created.id, updated.id);
        assert_eq!("Klapa festival 2026", updated.title);
        assert_eq!(None, updated.description);
        assert_eq!(None, updated.image_url);
        assert_eq!(created.pos, updated.pos);
        assert_eq!(created.start, updated.start);
        assert_eq!(updated, db.get_event(created.id.as_str()).unwrap());
    }

    #[test]
    fn moving_an_event_revalidates_the_location() {
        let db = setup();
        let alice = Id::from("alice");
        let created = create_new_event(&db, &alice, new_event(tomorrow())).unwrap();
        let id = created.id.as_str();

        // New place without a new position
        let update = EventUpdate {
            place_id: Some("trogir".into()),
            ..Default::default()
        };
        assert!(matches!(
            update_event(&db, &alice, id, update, Timestamp::now()),
            Err(Error::LocationOutsidePlace)
        ));

        let update = EventUpdate {
            place_id: Some("trogir".into()),
            lat: Some(43.5147),
            lng: Some(16.2512),
            ..Default::default()
        };
        let updated = update_event(&db, &alice, id, update, Timestamp::now()).unwrap();
        assert_eq!("trogir", updated.place_id.as_str());
    }

    #[test]
    fn only_the_owner_may_update_before_the_start() {
        let db = setup();
        let alice = Id::from("alice");
        let start = tomorrow();
        let created = create_new_event(&db, &alice, new_event(start)).unwrap();
        let id = created.id.as_str();
        assert!(matches!(
            update_event(&db, &"bob".into(), id, Default::default(), Timestamp::now()),
            Err(Error::Forbidden)
        ));
        assert!(matches!(
            update_event(&db, &alice, id, Default::default(), start),
            Err(Error::EventAlreadyStarted)
        ));
        assert!(matches!(
            update_event(&db, &alice, "unknown", Default::default(), Timestamp::now()),
            Err(Error::EventNotFound)
        ));
        assert_eq!(created, db.get_event(id).unwrap());
    }
}

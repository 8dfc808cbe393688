use super::*;
use dalmatia_core::util::parse::{parse_end_timestamp_param, parse_timestamp_param};

fn optional_id(id: Option<&str>) -> Option<Id> {
    id.map(str::trim).filter(|id| !id.is_empty()).map(Id::from)
}

#[get("/events?<place>&<category>&<from>&<to>")]
pub fn get_events(
    db: &State<Connections>,
    place: Option<&str>,
    category: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<Vec<json::Event>> {
    let query = usecases::EventQuery {
        place_id: optional_id(place),
        category_id: optional_id(category),
        start_min: parse_timestamp_param(from)?,
        end_max: parse_end_timestamp_param(to)?,
    };
    let events = flows::query_events(db, query)?;
    Ok(Json(to_json::events(events)))
}

#[get("/events/nearby?<lat>&<lng>&<radius>")]
pub fn get_nearby_events(
    db: &State<Connections>,
    lat: Option<&str>,
    lng: Option<&str>,
    radius: Option<&str>,
) -> Result<Vec<json::EventWithDistance>> {
    let query = usecases::NearbyQuery::parse(lat, lng, radius)?;
    let events = flows::nearby_events(db, query)?;
    Ok(Json(
        events
            .into_iter()
            .map(json::EventWithDistance::from)
            .collect(),
    ))
}

#[get("/events/my")]
pub fn get_my_events(
    db: &State<Connections>,
    account: Account,
) -> Result<json::PartitionedEvents> {
    let events = flows::my_events(db, account.user_id())?;
    Ok(Json(to_json::partitioned_events(events)))
}

#[get("/events/<id>")]
pub fn get_event(db: &State<Connections>, id: &str) -> Result<json::Event> {
    let event = flows::get_event(db, id)?;
    Ok(Json(event.into()))
}

#[post("/events", format = "application/json", data = "<ev>")]
pub fn post_event(
    db: &State<Connections>,
    account: Account,
    ev: JsonResult<json::NewEvent>,
) -> Result<json::Event> {
    let new_event = from_json::new_event(ev?.into_inner());
    let event = flows::create_event(db, account.user_id(), new_event)?;
    let event = flows::name_event(db, event)?;
    Ok(Json(event.into()))
}

#[put("/events/<id>", format = "application/json", data = "<ev>")]
pub fn put_event(
    db: &State<Connections>,
    account: Account,
    id: &str,
    ev: JsonResult<json::EventUpdate>,
) -> Result<json::Event> {
    let update = from_json::event_update(ev?.into_inner());
    let event = flows::update_event(db, account.user_id(), id, update)?;
    let event = flows::name_event(db, event)?;
    Ok(Json(event.into()))
}

#[delete("/events/<id>")]
pub fn delete_event(
    db: &State<Connections>,
    account: Account,
    id: &str,
) -> Result<json::Message> {
    flows::delete_event(db, account.user_id(), id)?;
    Ok(message("Event deleted"))
}

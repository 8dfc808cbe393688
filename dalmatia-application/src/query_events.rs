use super::*;

pub fn get_event(connections: &sqlite::Connections, id: &str) -> Result<NamedEvent> {
    let db = connections.shared()?;
    let event = usecases::get_event(&db, id)?;
    Ok(usecases::name_event(&db, event)?)
}

/// Adds the names of place and category to an event that
/// has just been stored.
pub fn name_event(connections: &sqlite::Connections, event: Event) -> Result<NamedEvent> {
    let db = connections.shared()?;
    Ok(usecases::name_event(&db, event)?)
}

pub fn query_events(
    connections: &sqlite::Connections,
    query: usecases::EventQuery,
) -> Result<Vec<NamedEvent>> {
    let db = connections.shared()?;
    let events = usecases::query_events(&db, query)?;
    Ok(usecases::name_events(&db, events)?)
}

pub fn nearby_events(
    connections: &sqlite::Connections,
    query: usecases::NearbyQuery,
) -> Result<Vec<(NamedEvent, Distance)>> {
    let db = connections.shared()?;
    let events = usecases::nearby_events(&db, query)?;
    let names = usecases::EventNames::load(&db)?;
    let events = events
        .into_iter()
        .map(|(event, distance)| names.name_event(event).map(|named| (named, distance)))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(events)
}

pub fn my_events(
    connections: &sqlite::Connections,
    user_id: &Id,
) -> Result<usecases::PartitionedEvents<NamedEvent>> {
    let db = connections.shared()?;
    let events = usecases::my_events(&db, user_id, Timestamp::now())?;
    let names = usecases::EventNames::load(&db)?;
    Ok(events.try_map(|event| names.name_event(event))?)
}

use super::*;

pub fn update_event(
    connections: &sqlite::Connections,
    user_id: &Id,
    id: &str,
    update: usecases::EventUpdate,
) -> Result<Event> {
    let now = Timestamp::now();
    let event = connections.exclusive()?.transaction(|conn| {
        let storable = usecases::prepare_event_update(conn, user_id, id, update, now)?;
        usecases::store_updated_event(conn, storable).map_err(|err| {
            warn!("Failed to store updated event {}: {}", id, err);
            err
        })
    })?;
    Ok(event)
}

use std::result;

use dalmatia_db_sqlite::DbReadWrite;

use super::*;
use usecases::{Error, NewEvent, NewEventMode};

pub fn create_event(
    connections: &sqlite::Connections,
    created_by: &Id,
    new_event: NewEvent,
) -> Result<Event> {
    let event = create_and_add_new_event(connections.exclusive()?, created_by, new_event)?;
    info!("Created event {} in place {}", event.id, event.place_id);
    Ok(event)
}

fn create_and_add_new_event(
    mut connection: DbReadWrite<'_>,
    created_by: &Id,
    new_event: NewEvent,
) -> result::Result<Event, Error> {
    connection.transaction(|conn| {
        let storable =
            usecases::import_new_event(conn, created_by, new_event, NewEventMode::Create)?;
        usecases::store_created_event(conn, storable).map_err(|err| {
            warn!("Failed to store newly created event: {}", err);
            err
        })
    })
}

use super::*;

pub fn add_to_wishlist(connections: &sqlite::Connections, user_id: &Id, event_id: &str) -> Result<()> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::add_to_wishlist(conn, user_id, event_id))?)
}

pub fn remove_from_wishlist(
    connections: &sqlite::Connections,
    user_id: &Id,
    event_id: &str,
) -> Result<bool> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::remove_from_wishlist(conn, user_id, event_id))?)
}

pub fn load_wishlist(connections: &sqlite::Connections, user_id: &Id) -> Result<Vec<NamedEvent>> {
    let db = connections.shared()?;
    let events = usecases::load_wishlist(&db, user_id)?;
    Ok(usecases::name_events(&db, events)?)
}

use super::*;

pub fn delete_event(connections: &sqlite::Connections, user_id: &Id, id: &str) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_event(conn, user_id, id))?;
    info!("Deleted event {id}");
    Ok(())
}

use super::prelude::*;

/// Only the creator of an event is allowed to delete it.
pub fn delete_event<R>(repo: &R, user_id: &Id, id: &str) -> Result<()>
where
    R: EventRepo,
{
    let event = repo.get_event(id).map_err(event_not_found)?;
    if !event.is_owned_by(user_id) {
        log::warn!("User {user_id} is not allowed to delete event {id}");
        return Err(Error::Forbidden);
    }
    repo.delete_event(id).map_err(event_not_found)?;
    log::debug!("Deleted event {id}");
    Ok(())
}

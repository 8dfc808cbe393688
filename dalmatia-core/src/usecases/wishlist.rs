use super::prelude::*;
use crate::repositories::Error as RepoError;

pub fn add_to_wishlist<R>(repo: &R, user_id: &Id, event_id: &str) -> Result<()>
where
    R: EventRepo + WishlistRepo,
{
    repo.get_event(event_id).map_err(event_not_found)?;
    repo.add_to_wishlist(user_id.as_str(), event_id)
        .map_err(|err| match err {
            RepoError::AlreadyExists => Error::AlreadyInWishlist,
            err => Error::Repo(err),
        })
}

/// Returns `false` if the event has not been on the wishlist.
pub fn remove_from_wishlist<R>(repo: &R, user_id: &Id, event_id: &str) -> Result<bool>
where
    R: WishlistRepo,
{
    Ok(repo.remove_from_wishlist(user_id.as_str(), event_id)?)
}

pub fn load_wishlist<R>(repo: &R, user_id: &Id) -> Result<Vec<Event>>
where
    R: EventRepo + WishlistRepo,
{
    let ids = repo.load_wishlist_event_ids(user_id.as_str())?;
    let ids: Vec<_> = ids.iter().map(Id::as_str).collect();
    Ok(repo.get_events_chronologically(&ids)?)
}

use super::*;

#[get("/wishlist")]
pub fn get_wishlist(db: &State<Connections>, account: Account) -> Result<Vec<json::Event>> {
    let events = flows::load_wishlist(db, account.user_id())?;
    Ok(Json(to_json::events(events)))
}

#[post("/wishlist/<event_id>")]
pub fn post_wishlist_entry(
    db: &State<Connections>,
    account: Account,
    event_id: &str,
) -> Result<json::Message> {
    flows::add_to_wishlist(db, account.user_id(), event_id)?;
    Ok(message("Added to wishlist"))
}

#[delete("/wishlist/<event_id>")]
pub fn delete_wishlist_entry(
    db: &State<Connections>,
    account: Account,
    event_id: &str,
) -> Result<json::Message> {
    if !flows::remove_from_wishlist(db, account.user_id(), event_id)? {
        debug!("Event {event_id} was not on the wishlist");
    }
    Ok(message("Removed from wishlist"))
}

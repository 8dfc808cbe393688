use super::*;

pub(super) fn add_to_wishlist(
    conn: &mut SqliteConnection,
    user_id: &str,
    event_id: &str,
) -> Result<()> {
    diesel::insert_into(schema::wishlist::table)
        .values(&models::NewWishlistEntry { user_id, event_id })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn remove_from_wishlist(
    conn: &mut SqliteConnection,
    user_id: &str,
    event_id: &str,
) -> Result<bool> {
    use schema::wishlist::dsl;
    let count = diesel::delete(
        dsl::wishlist
            .filter(dsl::user_id.eq(user_id))
            .filter(dsl::event_id.eq(event_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

pub(super) fn load_wishlist_event_ids(
    conn: &mut SqliteConnection,
    user_id: &str,
) -> Result<Vec<Id>> {
    use schema::wishlist::dsl;
    Ok(dsl::wishlist
        .select(dsl::event_id)
        .filter(dsl::user_id.eq(user_id))
        .load::<String>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Id::from)
        .collect())
}

use super::*;

fn into_review_model(review: &Review) -> models::Review {
    let Review {
        event_id,
        user_id,
        rating,
        comment,
        created_at,
    } = review;
    models::Review {
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        rating: i8::from(*rating).into(),
        comment: comment.clone(),
        created_at: created_at.as_millis(),
    }
}

fn load_review(model: models::Review) -> Result<Review> {
    let models::Review {
        event_id,
        user_id,
        rating,
        comment,
        created_at,
    } = model;
    let rating = RatingValue::try_from_i64(rating.into())
        .ok_or_else(|| anyhow!("Invalid rating value: {rating}"))?;
    Ok(Review {
        event_id: event_id.into(),
        user_id: user_id.into(),
        rating,
        comment,
        created_at: load_timestamp_millis(created_at)?,
    })
}

pub(super) fn create_review(conn: &mut SqliteConnection, review: Review) -> Result<()> {
    diesel::insert_into(schema::reviews::table)
        .values(&into_review_model(&review))
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn update_review(conn: &mut SqliteConnection, review: &Review) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::update(
        dsl::reviews
            .filter(dsl::event_id.eq(review.event_id.as_str()))
            .filter(dsl::user_id.eq(review.user_id.as_str())),
    )
    .set(&into_review_model(review))
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

pub(super) fn delete_review(conn: &mut SqliteConnection, event_id: &str, user_id: &str) -> Result<()> {
    use schema::reviews::dsl;
    let count = diesel::delete(
        dsl::reviews
            .filter(dsl::event_id.eq(event_id))
            .filter(dsl::user_id.eq(user_id)),
    )
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

pub(super) fn try_get_review(
    conn: &mut SqliteConnection,
    event_id: &str,
    user_id: &str,
) -> Result<Option<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::event_id.eq(event_id))
        .filter(dsl::user_id.eq(user_id))
        .first::<models::Review>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_review)
        .transpose()
}

pub(super) fn load_reviews_of_event(
    conn: &mut SqliteConnection,
    event_id: &str,
) -> Result<Vec<Review>> {
    use schema::reviews::dsl;
    dsl::reviews
        .filter(dsl::event_id.eq(event_id))
        .order_by((dsl::created_at.desc(), dsl::user_id))
        .load::<models::Review>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_review)
        .collect()
}

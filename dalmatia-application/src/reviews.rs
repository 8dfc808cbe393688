use super::*;

pub fn add_review(
    connections: &sqlite::Connections,
    user_id: &Id,
    new_review: usecases::NewReview,
) -> Result<(Review, RatingSummary)> {
    let now = Timestamp::now();
    // The review and the recalculated rating are committed together
    let (review, rating) = connections
        .exclusive()?
        .transaction(|conn| usecases::add_review(conn, user_id, new_review, now))?;
    debug!(
        "Event {} has now {} reviews with an average rating of {:.2}",
        review.event_id,
        rating.count,
        f64::from(rating.average)
    );
    Ok((review, rating))
}

pub fn update_review(
    connections: &sqlite::Connections,
    user_id: &Id,
    event_id: &str,
    update: usecases::ReviewUpdate,
) -> Result<(Review, RatingSummary)> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::update_review(conn, user_id, event_id, update))?)
}

pub fn delete_review(
    connections: &sqlite::Connections,
    user_id: &Id,
    event_id: &str,
) -> Result<RatingSummary> {
    Ok(connections
        .exclusive()?
        .transaction(|conn| usecases::delete_review(conn, user_id, event_id))?)
}

pub fn load_reviews_of_event(
    connections: &sqlite::Connections,
    event_id: &str,
) -> Result<Vec<ReviewWithAuthor>> {
    let db = connections.shared()?;
    let reviews = usecases::load_reviews_of_event(&db, event_id)?;
    Ok(usecases::with_authors(&db, reviews)?)
}

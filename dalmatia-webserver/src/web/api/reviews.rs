use super::*;

#[get("/reviews/event/<id>")]
pub fn get_reviews_of_event(db: &State<Connections>, id: &str) -> Result<Vec<json::Review>> {
    let reviews = flows::load_reviews_of_event(db, id)?;
    Ok(Json(reviews.into_iter().map(json::Review::from).collect()))
}

#[post("/reviews", format = "application/json", data = "<review>")]
pub fn post_review(
    db: &State<Connections>,
    account: Account,
    review: JsonResult<json::NewReview>,
) -> Result<json::Review> {
    let new_review = from_json::new_review(review?.into_inner());
    let (review, _) = flows::add_review(db, account.user_id(), new_review)?;
    Ok(Json(to_json::review(review, account.username())))
}

#[put("/reviews/<event_id>", format = "application/json", data = "<update>")]
pub fn put_review(
    db: &State<Connections>,
    account: Account,
    event_id: &str,
    update: JsonResult<json::ReviewUpdate>,
) -> Result<json::Review> {
    let update = from_json::review_update(update?.into_inner());
    let (review, _) = flows::update_review(db, account.user_id(), event_id, update)?;
    Ok(Json(to_json::review(review, account.username())))
}

#[delete("/reviews/<event_id>")]
pub fn delete_review(
    db: &State<Connections>,
    account: Account,
    event_id: &str,
) -> Result<json::Message> {
    flows::delete_review(db, account.user_id(), event_id)?;
    Ok(message("Review deleted"))
}

use super::prelude::*;
use crate::repositories::Error as RepoError;

#[derive(Debug, Clone)]
pub struct NewReview {
    pub event_id: String,
    pub rating: i64,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub rating: Option<i64>,
    pub comment: Option<String>,
}

fn parse_rating(rating: i64) -> Result<RatingValue> {
    RatingValue::try_from_i64(rating).ok_or(Error::RatingValue)
}

fn correct_comment(comment: Option<String>) -> Option<String> {
    comment
        .map(|c| c.trim().to_owned())
        .filter(|c| !c.is_empty())
}

/// Adds the first review of a user for an event and
/// recalculates the rating of the event.
pub fn add_review<R>(
    repo: &R,
    user_id: &Id,
    new_review: NewReview,
    now: Timestamp,
) -> Result<(Review, RatingSummary)>
where
    R: EventRepo + ReviewRepo,
{
    let NewReview {
        event_id,
        rating,
        comment,
    } = new_review;
    let rating = parse_rating(rating)?;
    repo.get_event(&event_id).map_err(event_not_found)?;
    let review = Review {
        event_id: event_id.into(),
        user_id: user_id.clone(),
        rating,
        comment: correct_comment(comment),
        created_at: now,
    };
    repo.create_review(review.clone()).map_err(|err| match err {
        RepoError::AlreadyExists => {
            log::info!(
                "User {} has already reviewed event {}",
                review.user_id,
                review.event_id
            );
            Error::ReviewExists
        }
        err => Error::Repo(err),
    })?;
    let summary = repo.recalculate_event_rating(review.event_id.as_str())?;
    Ok((review, summary))
}

pub fn update_review<R>(
    repo: &R,
    user_id: &Id,
    event_id: &str,
    update: ReviewUpdate,
) -> Result<(Review, RatingSummary)>
where
    R: EventRepo + ReviewRepo,
{
    let ReviewUpdate { rating, comment } = update;
    let rating = rating.map(parse_rating).transpose()?;
    let mut review = repo
        .try_get_review(event_id, user_id.as_str())?
        .ok_or(Error::ReviewNotFound)?;
    if let Some(rating) = rating {
        review.rating = rating;
    }
    if comment.is_some() {
        review.comment = correct_comment(comment);
    }
    repo.update_review(&review)?;
    let summary = repo.recalculate_event_rating(event_id)?;
    Ok((review, summary))
}

pub fn delete_review<R>(repo: &R, user_id: &Id, event_id: &str) -> Result<RatingSummary>
where
    R: EventRepo + ReviewRepo,
{
    repo.delete_review(event_id, user_id.as_str())
        .map_err(|err| match err {
            RepoError::NotFound => Error::ReviewNotFound,
            err => Error::Repo(err),
        })?;
    Ok(repo.recalculate_event_rating(event_id)?)
}

/// Newest reviews first.
pub fn load_reviews_of_event<R>(repo: &R, event_id: &str) -> Result<Vec<Review>>
where
    R: EventRepo + ReviewRepo,
{
    repo.get_event(event_id).map_err(event_not_found)?;
    Ok(repo.load_reviews_of_event(event_id)?)
}

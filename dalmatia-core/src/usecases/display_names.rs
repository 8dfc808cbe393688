use std::collections::HashMap;

use anyhow::anyhow;

use super::prelude::*;
use crate::repositories::Error as RepoError;

/// Names of all places and categories, looked up by id.
#[derive(Debug, Default)]
pub struct EventNames {
    places: HashMap<Id, String>,
    categories: HashMap<Id, String>,
}

impl EventNames {
    pub fn load<R>(repo: &R) -> Result<Self>
    where
        R: PlaceRepo + CategoryRepo,
    {
        let places = repo.all_place_names()?.into_iter().collect();
        let categories = repo
            .all_categories()?
            .into_iter()
            .map(|Category { id, name }| (id, name))
            .collect();
        Ok(Self { places, categories })
    }

    pub fn name_event(&self, event: Event) -> Result<NamedEvent> {
        let place_name = self
            .places
            .get(&event.place_id)
            .cloned()
            .ok_or_else(|| dangling_reference("place", &event.place_id, &event.id))?;
        let category_name = self
            .categories
            .get(&event.category_id)
            .cloned()
            .ok_or_else(|| dangling_reference("category", &event.category_id, &event.id))?;
        Ok(NamedEvent {
            event,
            place_name,
            category_name,
        })
    }

    pub fn name_events(&self, events: Vec<Event>) -> Result<Vec<NamedEvent>> {
        events.into_iter().map(|e| self.name_event(e)).collect()
    }
}

fn dangling_reference(what: &str, id: &Id, event_id: &Id) -> Error {
    RepoError::Other(anyhow!("Event {event_id} refers to an unknown {what} {id}")).into()
}

pub fn name_events<R>(repo: &R, events: Vec<Event>) -> Result<Vec<NamedEvent>>
where
    R: PlaceRepo + CategoryRepo,
{
    if events.is_empty() {
        return Ok(vec![]);
    }
    EventNames::load(repo)?.name_events(events)
}

pub fn name_event<R>(repo: &R, event: Event) -> Result<NamedEvent>
where
    R: PlaceRepo + CategoryRepo,
{
    let place_name = repo.get_place(event.place_id.as_str())?.name;
    let category_name = repo.get_category(event.category_id.as_str())?.name;
    Ok(NamedEvent {
        event,
        place_name,
        category_name,
    })
}

/// Adds the name of the author to each review.
pub fn with_authors<R>(repo: &R, reviews: Vec<Review>) -> Result<Vec<ReviewWithAuthor>>
where
    R: UserRepo,
{
    let mut usernames: HashMap<Id, String> = HashMap::new();
    let mut named = Vec::with_capacity(reviews.len());
    for review in reviews {
        let username = match usernames.get(&review.user_id) {
            Some(username) => username.clone(),
            None => {
                let user = repo.get_user(review.user_id.as_str())?;
                usernames.insert(user.id, user.username.clone());
                user.username
            }
        };
        named.push(ReviewWithAuthor { review, username });
    }
    Ok(named)
}

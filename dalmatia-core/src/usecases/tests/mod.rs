use std::{cell::RefCell, result};

use super::prelude::*;
use crate::{
    entities::wishlist::WishlistEntry, repositories::Error as RepoError,
};

type RepoResult<T> = result::Result<T, RepoError>;

trait HasId {
    fn id(&self) -> &str;
}

impl HasId for Event {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasId for Place {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasId for Category {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasId for User {
    fn id(&self) -> &str {
        self.id.as_str()
    }
}

/// In-memory repositories for testing use cases.
#[derive(Default)]
pub struct MockDb {
    pub events: RefCell<Vec<Event>>,
    pub places: RefCell<Vec<Place>>,
    pub categories: RefCell<Vec<Category>>,
    pub users: RefCell<Vec<User>>,
    pub reviews: RefCell<Vec<Review>>,
    pub wishlist: RefCell<Vec<WishlistEntry>>,
}

fn get<T: Clone + HasId>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.id() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + HasId>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.id() == e.id()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + HasId>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == e.id()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + HasId>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.id() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn sort_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
}

impl PlaceRepo for MockDb {
    fn create_place(&self, place: Place) -> RepoResult<()> {
        if self.places.borrow().iter().any(|p| p.name == place.name) {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.places.borrow_mut(), place)
    }
    fn update_place(&self, place: &Place) -> RepoResult<()> {
        update(&mut self.places.borrow_mut(), place)
    }
    fn get_place(&self, id: &str) -> RepoResult<Place> {
        get(&self.places.borrow(), id)
    }
    fn try_get_place_by_name(&self, name: &str) -> RepoResult<Option<Place>> {
        Ok(self
            .places
            .borrow()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }
    fn all_places(&self) -> RepoResult<Vec<Place>> {
        let mut places = self.places.borrow().clone();
        places.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(places)
    }
    fn all_place_names(&self) -> RepoResult<Vec<(Id, String)>> {
        Ok(self
            .all_places()?
            .into_iter()
            .map(|p| (p.id, p.name))
            .collect())
    }
    fn count_places(&self) -> RepoResult<usize> {
        Ok(self.places.borrow().len())
    }
}

impl CategoryRepo for MockDb {
    fn create_category(&self, category: Category) -> RepoResult<()> {
        if self
            .categories
            .borrow()
            .iter()
            .any(|c| c.name == category.name)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.categories.borrow_mut(), category)
    }
    fn get_category(&self, id: &str) -> RepoResult<Category> {
        get(&self.categories.borrow(), id)
    }
    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        let mut categories = self.categories.borrow().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
}

impl EventRepo for MockDb {
    fn create_event(&self, event: Event) -> RepoResult<()> {
        create(&mut self.events.borrow_mut(), event)
    }
    fn update_event(&self, event: &Event) -> RepoResult<()> {
        update(&mut self.events.borrow_mut(), event)
    }
    fn delete_event(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.events.borrow_mut(), id)?;
        self.reviews.borrow_mut().retain(|r| r.event_id.as_str() != id);
        self.wishlist
            .borrow_mut()
            .retain(|w| w.event_id.as_str() != id);
        Ok(())
    }

    fn get_event(&self, id: &str) -> RepoResult<Event> {
        get(&self.events.borrow(), id)
    }
    fn get_events_chronologically(&self, ids: &[&str]) -> RepoResult<Vec<Event>> {
        let mut events: Vec<_> = self
            .events
            .borrow()
            .iter()
            .filter(|e| ids.iter().any(|id| e.id.as_str() == *id))
            .cloned()
            .collect();
        sort_chronologically(&mut events);
        Ok(events)
    }

    fn all_events_chronologically(&self) -> RepoResult<Vec<Event>> {
        let mut events = self.events.borrow().clone();
        sort_chronologically(&mut events);
        Ok(events)
    }
    fn filter_events_chronologically(&self, filter: &EventFilter) -> RepoResult<Vec<Event>> {
        let EventFilter {
            bbox,
            category_id,
            start_min,
            end_max,
            created_by,
        } = filter;
        let mut events: Vec<_> = self
            .events
            .borrow()
            .iter()
            .filter(|e| bbox.map(|bbox| bbox.contains_point(e.pos)).unwrap_or(true))
            .filter(|e| category_id.as_ref().map(|id| &e.category_id == id).unwrap_or(true))
            .filter(|e| start_min.map(|t| e.start >= t).unwrap_or(true))
            .filter(|e| end_max.map(|t| e.end <= t).unwrap_or(true))
            .filter(|e| created_by.as_ref().map(|id| &e.created_by == id).unwrap_or(true))
            .cloned()
            .collect();
        sort_chronologically(&mut events);
        Ok(events)
    }

    fn count_events(&self) -> RepoResult<usize> {
        Ok(self.events.borrow().len())
    }

    fn recalculate_event_rating(&self, id: &str) -> RepoResult<RatingSummary> {
        let summary = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.event_id.as_str() == id)
            .map(|r| r.rating)
            .collect::<AvgRatingValueBuilder>()
            .build();
        let mut events = self.events.borrow_mut();
        let event = events
            .iter_mut()
            .find(|e| e.id.as_str() == id)
            .ok_or(RepoError::NotFound)?;
        event.rating = summary;
        Ok(summary)
    }
}

impl ReviewRepo for MockDb {
    fn create_review(&self, review: Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        if reviews
            .iter()
            .any(|r| r.event_id == review.event_id && r.user_id == review.user_id)
        {
            return Err(RepoError::AlreadyExists);
        }
        reviews.push(review);
        Ok(())
    }
    fn update_review(&self, review: &Review) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let existing = reviews
            .iter_mut()
            .find(|r| r.event_id == review.event_id && r.user_id == review.user_id)
            .ok_or(RepoError::NotFound)?;
        *existing = review.clone();
        Ok(())
    }
    fn delete_review(&self, event_id: &str, user_id: &str) -> RepoResult<()> {
        let mut reviews = self.reviews.borrow_mut();
        let pos = reviews
            .iter()
            .position(|r| r.event_id.as_str() == event_id && r.user_id.as_str() == user_id)
            .ok_or(RepoError::NotFound)?;
        reviews.remove(pos);
        Ok(())
    }
    fn try_get_review(&self, event_id: &str, user_id: &str) -> RepoResult<Option<Review>> {
        Ok(self
            .reviews
            .borrow()
            .iter()
            .find(|r| r.event_id.as_str() == event_id && r.user_id.as_str() == user_id)
            .cloned())
    }
    fn load_reviews_of_event(&self, event_id: &str) -> RepoResult<Vec<Review>> {
        let mut reviews: Vec<_> = self
            .reviews
            .borrow()
            .iter()
            .filter(|r| r.event_id.as_str() == event_id)
            .cloned()
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reviews)
    }
}

impl WishlistRepo for MockDb {
    fn add_to_wishlist(&self, user_id: &str, event_id: &str) -> RepoResult<()> {
        let entry = WishlistEntry {
            user_id: user_id.into(),
            event_id: event_id.into(),
        };
        let mut wishlist = self.wishlist.borrow_mut();
        if wishlist.contains(&entry) {
            return Err(RepoError::AlreadyExists);
        }
        wishlist.push(entry);
        Ok(())
    }
    fn remove_from_wishlist(&self, user_id: &str, event_id: &str) -> RepoResult<bool> {
        let mut wishlist = self.wishlist.borrow_mut();
        let len = wishlist.len();
        wishlist.retain(|w| !(w.user_id.as_str() == user_id && w.event_id.as_str() == event_id));
        Ok(wishlist.len() < len)
    }
    fn load_wishlist_event_ids(&self, user_id: &str) -> RepoResult<Vec<Id>> {
        Ok(self
            .wishlist
            .borrow()
            .iter()
            .filter(|w| w.user_id.as_str() == user_id)
            .map(|w| w.event_id.clone())
            .collect())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
    fn try_get_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[test]
fn recalculated_rating_of_unknown_event() {
    let db = MockDb::default();
    assert!(matches!(
        db.recalculate_event_rating("unknown"),
        Err(RepoError::NotFound)
    ));
}

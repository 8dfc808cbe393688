use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPlace {
    pub name: String,
    pub kind: PlaceKind,
    pub county_id: u32,
    pub boundary: Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

/// Creates a new place or replaces the place with the same name.
///
/// Boundaries are immutable during normal operation, only a
/// re-import may replace them.
pub fn import_place<R>(repo: &R, new_place: NewPlace) -> Result<(Place, ImportOutcome)>
where
    R: PlaceRepo,
{
    let NewPlace {
        name,
        kind,
        county_id,
        boundary,
    } = new_place;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::PlaceName);
    }
    boundary.validate()?;
    match repo.try_get_place_by_name(name)? {
        Some(existing) => {
            let place = Place {
                kind,
                county_id,
                boundary,
                ..existing
            };
            repo.update_place(&place)?;
            Ok((place, ImportOutcome::Updated))
        }
        None => {
            let place = Place {
                id: Id::new(),
                name: name.to_owned(),
                kind,
                county_id,
                boundary,
            };
            repo.create_place(place.clone())?;
            Ok((place, ImportOutcome::Created))
        }
    }
}

/// Imports all valid places, invalid places are skipped.
pub fn import_places<R>(repo: &R, places: Vec<NewPlace>) -> Result<ImportSummary>
where
    R: PlaceRepo,
{
    let mut summary = ImportSummary::default();
    for new_place in places {
        let name = new_place.name.clone();
        match import_place(repo, new_place) {
            Ok((_, ImportOutcome::Created)) => summary.created += 1,
            Ok((_, ImportOutcome::Updated)) => summary.updated += 1,
            Err(err @ (Error::PlaceName | Error::Boundary)) => {
                log::warn!("Skipping place '{name}': {err}");
                summary.skipped += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(summary)
}

pub fn get_place<R: PlaceRepo>(repo: &R, id: &str) -> Result<Place> {
    repo.get_place(id).map_err(place_not_found)
}

/// All places ordered by name.
pub fn load_places<R: PlaceRepo>(repo: &R) -> Result<Vec<Place>> {
    Ok(repo.all_places()?)
}

pub fn create_category<R: CategoryRepo>(repo: &R, name: &str) -> Result<Category> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::CategoryName);
    }
    let category = Category {
        id: Id::new(),
        name: name.to_owned(),
    };
    repo.create_category(category.clone())?;
    Ok(category)
}

/// All categories ordered by name.
pub fn load_categories<R: CategoryRepo>(repo: &R) -> Result<Vec<Category>> {
    Ok(repo.all_categories()?)
}

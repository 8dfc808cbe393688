use super::prelude::*;

/// Filters for listing events.
///
/// All filters are optional and combined with AND.
#[derive(Clone, Debug, Default)]
pub struct EventQuery {
    pub place_id: Option<Id>,
    pub category_id: Option<Id>,
    pub start_min: Option<Timestamp>,
    pub end_max: Option<Timestamp>,
}

impl EventQuery {
    pub fn is_empty(&self) -> bool {
        let Self {
            place_id,
            category_id,
            start_min,
            end_max,
        } = self;
        place_id.is_none() && category_id.is_none() && start_min.is_none() && end_max.is_none()
    }
}

/// Events ordered by start date.
pub fn query_events<R>(repo: &R, query: EventQuery) -> Result<Vec<Event>>
where
    R: EventRepo + PlaceRepo,
{
    if query.is_empty() {
        return Ok(repo.all_events_chronologically()?);
    }
    let EventQuery {
        place_id,
        category_id,
        start_min,
        end_max,
    } = query;

    let place = place_id
        .map(|id| repo.get_place(id.as_str()).map_err(place_not_found))
        .transpose()?;
    let bbox = match &place {
        Some(place) => match place.boundary.bbox() {
            Some(bbox) => Some(bbox),
            None => {
                log::warn!("Place {} has an empty boundary", place.id);
                return Ok(vec![]);
            }
        },
        None => None,
    };

    let filter = EventFilter {
        bbox,
        category_id,
        start_min,
        end_max,
        created_by: None,
    };
    let mut events = repo.filter_events_chronologically(&filter)?;
    if let Some(place) = place {
        // The bounding box only pre-selects the candidates
        events.retain(|e| place.boundary.contains_point(e.pos));
    }
    Ok(events)
}

/// All events whose position intersects the boundary of the place.
pub fn events_within_place<R>(repo: &R, place_id: &str) -> Result<Vec<Event>>
where
    R: EventRepo + PlaceRepo,
{
    query_events(
        repo,
        EventQuery {
            place_id: Some(place_id.into()),
            ..Default::default()
        },
    )
}

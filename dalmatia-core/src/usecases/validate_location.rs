use super::prelude::*;

/// Checks if the position lies within (or on) the boundary of a place.
pub fn is_location_within_place<R>(repo: &R, place_id: &str, pos: MapPoint) -> Result<bool>
where
    R: PlaceRepo,
{
    if !pos.is_valid() {
        return Err(Error::InvalidPosition);
    }
    let place = repo.get_place(place_id).map_err(place_not_found)?;
    Ok(place.boundary.contains_point(pos))
}

/// Rejects positions outside of the boundary of the place.
pub fn ensure_location_within_place<R>(repo: &R, place_id: &str, pos: MapPoint) -> Result<()>
where
    R: PlaceRepo,
{
    if !is_location_within_place(repo, place_id, pos)? {
        log::warn!("Location {pos} is outside of place {place_id}");
        return Err(Error::LocationOutsidePlace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;

    fn split() -> Place {
        Place::build()
            .id("split")
            .name("Split")
            .kind(PlaceKind::City)
            .county_id(3)
            .rect((43.49, 16.38), (43.55, 16.52))
            .finish()
    }

    #[test]
    fn inside_outside_and_on_the_boundary() {
        let db = MockDb::default();
        db.create_place(split()).unwrap();
        let center = MapPoint::from_lat_lng_deg(43.5081, 16.4402);
        let zadar = MapPoint::from_lat_lng_deg(44.1194, 15.2314);
        let corner = MapPoint::from_lat_lng_deg(43.49, 16.38);
        assert!(is_location_within_place(&db, "split", center).unwrap());
        assert!(!is_location_within_place(&db, "split", zadar).unwrap());
        assert!(is_location_within_place(&db, "split", corner).unwrap());
        assert!(ensure_location_within_place(&db, "split", center).is_ok());
        assert!(matches!(
            ensure_location_within_place(&db, "split", zadar),
            Err(Error::LocationOutsidePlace)
        ));
    }

    #[test]
    fn unknown_place() {
        let db = MockDb::default();
        let center = MapPoint::from_lat_lng_deg(43.5081, 16.4402);
        assert!(matches!(
            is_location_within_place(&db, "split", center),
            Err(Error::PlaceNotFound)
        ));
    }

    #[test]
    fn invalid_boundaries_fail_closed() {
        let db = MockDb::default();
        let mut place = split();
        place.boundary = MultiPolygon::default().into();
        db.create_place(place).unwrap();
        let center = MapPoint::from_lat_lng_deg(43.5081, 16.4402);
        assert!(matches!(
            ensure_location_within_place(&db, "split", center),
            Err(Error::LocationOutsidePlace)
        ));
        assert!(matches!(
            is_location_within_place(&db, "split", MapPoint::default()),
            Err(Error::InvalidPosition)
        ));
    }
}

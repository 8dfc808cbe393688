use super::prelude::*;
use crate::util::parse::{parse_position, parse_radius};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    pub center: MapPoint,
    pub radius: Distance,
}

impl NearbyQuery {
    /// Parses raw query parameters, all of them are required.
    pub fn parse(lat: Option<&str>, lng: Option<&str>, radius: Option<&str>) -> Result<Self> {
        let center = parse_position(lat, lng)?;
        let radius = parse_radius(radius)?;
        Ok(Self { center, radius })
    }
}

/// Events within the given great-circle distance, the closest first.
///
/// Events with an equal distance are ordered by their id.
pub fn nearby_events<R>(repo: &R, query: NearbyQuery) -> Result<Vec<(Event, Distance)>>
where
    R: EventRepo,
{
    let NearbyQuery { center, radius } = query;
    if !center.is_valid() {
        return Err(Error::InvalidPosition);
    }
    if !radius.is_valid() || !radius.to_meters().is_finite() {
        return Err(Error::InvalidRadius);
    }
    // Pad the bounding box to compensate for rounding errors
    let bbox = MapBbox::centered_around(center, Distance::from_meters(radius.to_meters() + 1.0));
    let candidates = repo.filter_events_chronologically(&EventFilter {
        bbox: Some(bbox),
        ..Default::default()
    })?;
    let mut results: Vec<_> = candidates
        .into_iter()
        .filter_map(|event| {
            let distance = MapPoint::distance(center, event.pos)?;
            (distance <= radius).then_some((event, distance))
        })
        .collect();
    results.sort_by(|(lhs_event, lhs_dist), (rhs_event, rhs_dist)| {
        lhs_dist
            .to_meters()
            .total_cmp(&rhs_dist.to_meters())
            .then_with(|| lhs_event.id.cmp(&rhs_event.id))
    });
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::entities::builders::*;

    const SPLIT: (f64, f64) = (43.5081, 16.4402);

    fn setup() -> MockDb {
        let db = MockDb::default();
        let events = [
            ("zadar", (44.1194, 15.2314)),
            ("trogir", (43.5147, 16.2512)),
            ("dubrovnik", (42.6507, 18.0944)),
            ("split_b", SPLIT),
            ("split_a", SPLIT),
            ("makarska", (43.2969, 17.0178)),
        ];
        for (id, (lat, lng)) in events {
            db.create_event(
                Event::build()
                    .id(id)
                    .pos(MapPoint::from_lat_lng_deg(lat, lng))
                    .finish(),
            )
            .unwrap();
        }
        db
    }

    fn query(radius_m: f64) -> NearbyQuery {
        NearbyQuery {
            center: MapPoint::from_lat_lng_deg(SPLIT.0, SPLIT.1),
            radius: Distance::from_meters(radius_m),
        }
    }

    #[test]
    fn ordered_by_distance_then_id() {
        let db = setup();
        let results = nearby_events(&db, query(120_000.0)).unwrap();
        let ids: Vec<_> = results.iter().map(|(e, _)| e.id.as_str()).collect();
        assert_eq!(vec!["split_a", "split_b", "trogir", "makarska", "zadar"], ids);
        assert!(results
            .windows(2)
            .all(|w| w[0].1.to_meters() <= w[1].1.to_meters()));
        assert_eq!(0.0, results[0].1.to_meters());
    }

    #[test]
    fn radius_is_inclusive_and_exact() {
        let db = setup();
        let ids = |r| -> Vec<String> {
            nearby_events(&db, query(r))
                .unwrap()
                .into_iter()
                .map(|(e, _)| e.id.into())
                .collect()
        };
        // Split -> Trogir: ~15.26 km
        assert_eq!(vec!["split_a", "split_b"], ids(15_000.0));
        assert_eq!(vec!["split_a", "split_b", "trogir"], ids(15_500.0));
        // Split -> Zadar: ~118.4 km, Split -> Dubrovnik: ~164.7 km
        assert_eq!(5, ids(118_500.0).len());
        assert_eq!(6, ids(170_000.0).len());
        assert_eq!(vec!["split_a", "split_b"], ids(0.0));
    }

    #[test]
    fn parse_query() {
        let q = NearbyQuery::parse(Some("43.5081"), Some("16.4402"), Some("2000")).unwrap();
        assert_eq!(query(2_000.0), q);
        assert!(matches!(
            NearbyQuery::parse(Some("43.5"), None, Some("2000")),
            Err(Error::MissingParameter("lng"))
        ));
        assert!(matches!(
            NearbyQuery::parse(Some("43.5"), Some("16.4"), Some("two")),
            Err(Error::InvalidRadius)
        ));
    }

    #[test]
    fn reject_invalid_input() {
        let db = setup();
        let mut q = query(1_000.0);
        q.radius = Distance::from_meters(-1.0);
        assert!(matches!(nearby_events(&db, q), Err(Error::InvalidRadius)));
        let mut q = query(1_000.0);
        q.center = MapPoint::default();
        assert!(matches!(nearby_events(&db, q), Err(Error::InvalidPosition)));
    }
}

use super::*;
use dalmatia_entities as e;
use e::{
    geo::MapPoint,
    geometry::{Boundary, GeometryError, LinearRing, MultiPolygon, Polygon},
};

fn position_from_point(pt: MapPoint) -> Vec<f64> {
    let (lat, lng) = pt.to_lat_lng_deg();
    vec![lng, lat]
}

fn point_from_position(pos: &[f64]) -> Result<MapPoint, GeometryError> {
    match pos {
        [lng, lat, ..] => {
            MapPoint::try_from_lat_lng_deg(*lat, *lng).ok_or(GeometryError::Coordinate)
        }
        _ => Err(GeometryError::Coordinate),
    }
}

fn ring_from_positions(positions: &[Vec<f64>]) -> Result<LinearRing, GeometryError> {
    let mut vertices = positions
        .iter()
        .map(|pos| point_from_position(pos))
        .collect::<Result<Vec<_>, _>>()?;
    if vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    Ok(LinearRing::new(vertices))
}

// GeoJSON rings are explicitly closed
fn positions_from_ring(ring: &LinearRing) -> Vec<Vec<f64>> {
    let mut positions: Vec<_> = ring
        .vertices()
        .iter()
        .copied()
        .map(position_from_point)
        .collect();
    if let (Some(first), Some(last)) = (ring.vertices().first(), ring.vertices().last()) {
        if first != last {
            positions.push(position_from_point(*first));
        }
    }
    positions
}

fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon, GeometryError> {
    let mut rings = rings.iter().map(|ring| ring_from_positions(ring));
    let exterior = rings.next().ok_or(GeometryError::Ring)??;
    let holes = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, holes))
}

fn rings_from_polygon(polygon: &Polygon) -> Vec<Vec<Vec<f64>>> {
    std::iter::once(&polygon.exterior)
        .chain(polygon.holes.iter())
        .map(positions_from_ring)
        .collect()
}

impl From<MapPoint> for Geometry {
    fn from(from: MapPoint) -> Self {
        Self::Point(position_from_point(from))
    }
}

impl TryFrom<&Geometry> for MapPoint {
    type Error = GeometryError;
    fn try_from(from: &Geometry) -> Result<Self, Self::Error> {
        match from {
            Geometry::Point(pos) => point_from_position(pos),
            Geometry::Polygon(_) => Err(GeometryError::Unsupported("Polygon".into())),
            Geometry::MultiPolygon(_) => Err(GeometryError::Unsupported("MultiPolygon".into())),
        }
    }
}

impl From<&Boundary> for Geometry {
    fn from(from: &Boundary) -> Self {
        match from {
            Boundary::Polygon(polygon) => Self::Polygon(rings_from_polygon(polygon)),
            Boundary::MultiPolygon(MultiPolygon(polygons)) => {
                Self::MultiPolygon(polygons.iter().map(rings_from_polygon).collect())
            }
        }
    }
}

impl TryFrom<&Geometry> for Boundary {
    type Error = GeometryError;
    fn try_from(from: &Geometry) -> Result<Self, Self::Error> {
        match from {
            Geometry::Point(_) => Err(GeometryError::Unsupported("Point".into())),
            Geometry::Polygon(rings) => polygon_from_rings(rings).map(Into::into),
            Geometry::MultiPolygon(polygons) => polygons
                .iter()
                .map(|rings| polygon_from_rings(rings))
                .collect::<Result<Vec<_>, _>>()
                .map(|polygons| MultiPolygon(polygons).into()),
        }
    }
}

impl From<e::event::NamedEvent> for Event {
    fn from(from: e::event::NamedEvent) -> Self {
        let e::event::NamedEvent {
            event,
            place_name,
            category_name,
        } = from;
        let e::event::Event {
            id,
            title,
            description,
            place_id,
            category_id,
            price,
            start,
            end,
            pos,
            organizer,
            image_url,
            created_by,
            rating,
        } = event;
        let e::event::Organizer {
            name,
            surname,
            email,
            phone,
        } = organizer;
        Self {
            id: id.into(),
            title,
            description,
            place_id: place_id.into(),
            place_name,
            category_id: category_id.into(),
            category_name,
            price,
            date_start: start.as_secs(),
            date_end: end.as_secs(),
            location_point: pos.into(),
            organizer_name: name,
            organizer_surname: surname,
            organizer_email: email,
            organizer_phone: phone,
            image_url: image_url.map(|url| url.to_string()),
            average_rating: rating.average.into(),
            reviews_count: rating.count,
            created_by: created_by.into(),
        }
    }
}

impl From<(e::event::NamedEvent, e::geo::Distance)> for EventWithDistance {
    fn from((event, distance): (e::event::NamedEvent, e::geo::Distance)) -> Self {
        Self {
            event: event.into(),
            distance: distance.to_meters(),
        }
    }
}

impl From<e::place::Place> for Place {
    fn from(from: e::place::Place) -> Self {
        let e::place::Place {
            id,
            name,
            kind,
            county_id,
            boundary: _,
        } = from;
        Self {
            id: id.into(),
            name,
            kind: kind.to_string(),
            county_id,
        }
    }
}

impl From<e::place::Place> for Feature {
    fn from(from: e::place::Place) -> Self {
        let geometry = Geometry::from(&from.boundary);
        let properties = match serde_json::to_value(Place::from(from)) {
            Ok(serde_json::Value::Object(properties)) => Some(properties),
            _ => None,
        };
        Self {
            geometry: Some(geometry),
            properties,
        }
    }
}

impl From<e::category::Category> for Category {
    fn from(from: e::category::Category) -> Self {
        let e::category::Category { id, name } = from;
        Self {
            id: id.into(),
            name,
        }
    }
}

impl From<e::review::ReviewWithAuthor> for Review {
    fn from(from: e::review::ReviewWithAuthor) -> Self {
        let e::review::ReviewWithAuthor { review, username } = from;
        let e::review::Review {
            event_id,
            user_id,
            rating,
            comment,
            created_at,
        } = review;
        Self {
            event_id: event_id.into(),
            user_id: user_id.into(),
            username,
            rating: rating.into(),
            comment,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<e::user::User> for User {
    fn from(from: e::user::User) -> Self {
        let e::user::User {
            id,
            username,
            email,
            password: _password,
        } = from;
        Self {
            id: id.into(),
            username,
            email,
        }
    }
}

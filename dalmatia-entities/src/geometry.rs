//! Polygonal boundaries of places.
//!
//! Containment is decided with an exact ray casting test on the
//! fixed-point coordinates, i.e. without any floating-point rounding.
//! Points exactly on an edge or vertex are considered inside.

use itertools::Itertools;
use thiserror::Error;

use crate::geo::{MapBbox, MapPoint};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Invalid coordinate")]
    Coordinate,
    #[error("A ring needs at least 3 distinct vertices that span an area")]
    Ring,
    #[error("Unsupported geometry type '{0}'")]
    Unsupported(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Location {
    Outside,
    OnBoundary,
    Inside,
}

/// A closed sequence of vertices.
///
/// The last vertex may or may not repeat the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearRing(pub Vec<MapPoint>);

impl LinearRing {
    pub fn new(vertices: Vec<MapPoint>) -> Self {
        Self(vertices)
    }

    pub fn vertices(&self) -> &[MapPoint] {
        &self.0
    }

    fn edges(&self) -> impl Iterator<Item = (MapPoint, MapPoint)> + '_ {
        self.0.iter().copied().circular_tuple_windows()
    }

    /// Twice the signed area in raw coordinate units.
    fn signed_area2(&self) -> i128 {
        self.edges()
            .map(|(a, b)| {
                let (ax, ay) = raw_xy(a);
                let (bx, by) = raw_xy(b);
                ax * by - bx * ay
            })
            .sum()
    }

    pub fn is_valid(&self) -> bool {
        self.0.iter().all(|pt| pt.is_valid())
            && self.0.iter().unique().count() >= 3
            && self.signed_area2() != 0
    }

    fn locate(&self, pt: MapPoint) -> Location {
        let (px, py) = raw_xy(pt);
        let mut inside = false;
        for (a, b) in self.edges() {
            let (ax, ay) = raw_xy(a);
            let (bx, by) = raw_xy(b);
            let cross = (bx - ax) * (py - ay) - (by - ay) * (px - ax);
            if cross == 0
                && ax.min(bx) <= px
                && px <= ax.max(bx)
                && ay.min(by) <= py
                && py <= ay.max(by)
            {
                return Location::OnBoundary;
            }
            if (ay > py) != (by > py) {
                // Does the edge cross the horizontal ray to the right of pt?
                let dy = by - ay;
                let lhs = (px - ax) * dy;
                let rhs = (py - ay) * (bx - ax);
                if (dy > 0 && lhs < rhs) || (dy < 0 && lhs > rhs) {
                    inside = !inside;
                }
            }
        }
        if inside {
            Location::Inside
        } else {
            Location::Outside
        }
    }
}

// x = longitude, y = latitude
fn raw_xy(pt: MapPoint) -> (i128, i128) {
    (
        i128::from(pt.lng().to_raw()),
        i128::from(pt.lat().to_raw()),
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polygon {
    pub exterior: LinearRing,
    pub holes: Vec<LinearRing>,
}

impl Polygon {
    pub fn new(exterior: LinearRing, holes: Vec<LinearRing>) -> Self {
        Self { exterior, holes }
    }

    pub fn is_valid(&self) -> bool {
        self.exterior.is_valid() && self.holes.iter().all(LinearRing::is_valid)
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        if !pt.is_valid() || !self.is_valid() {
            return false;
        }
        match self.exterior.locate(pt) {
            Location::Outside => false,
            Location::OnBoundary => true,
            Location::Inside => self
                .holes
                .iter()
                .all(|hole| hole.locate(pt) != Location::Inside),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiPolygon(pub Vec<Polygon>);

impl MultiPolygon {
    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(Polygon::is_valid)
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        self.is_valid() && self.0.iter().any(|polygon| polygon.contains_point(pt))
    }
}

/// The boundary of a place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl Boundary {
    pub fn polygons(&self) -> &[Polygon] {
        match self {
            Self::Polygon(polygon) => std::slice::from_ref(polygon),
            Self::MultiPolygon(MultiPolygon(polygons)) => polygons,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Self::Polygon(polygon) => polygon.is_valid(),
            Self::MultiPolygon(multi) => multi.is_valid(),
        }
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        let invalid_vertex = self
            .polygons()
            .iter()
            .flat_map(|p| std::iter::once(&p.exterior).chain(p.holes.iter()))
            .flat_map(|ring| ring.vertices().iter())
            .any(|pt| !pt.is_valid());
        if invalid_vertex {
            return Err(GeometryError::Coordinate);
        }
        if !self.is_valid() {
            return Err(GeometryError::Ring);
        }
        Ok(())
    }

    /// Inclusive containment test. Invalid boundaries contain nothing.
    pub fn contains_point(&self, pt: MapPoint) -> bool {
        match self {
            Self::Polygon(polygon) => polygon.contains_point(pt),
            Self::MultiPolygon(multi) => multi.contains_point(pt),
        }
    }

    /// The (non-wrapping) bounding box of all exterior rings.
    pub fn bbox(&self) -> Option<MapBbox> {
        MapBbox::enclosing(
            self.polygons()
                .iter()
                .flat_map(|p| p.exterior.vertices().iter().copied()),
        )
    }
}

impl From<Polygon> for Boundary {
    fn from(from: Polygon) -> Self {
        Self::Polygon(from)
    }
}

impl From<MultiPolygon> for Boundary {
    fn from(from: MultiPolygon) -> Self {
        Self::MultiPolygon(from)
    }
}

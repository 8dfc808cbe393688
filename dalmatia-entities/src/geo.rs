use itertools::Itertools;
use thiserror::Error;

pub type RawCoord = i32;

// Assumption: 2-complement binary representation
const RAW_COORD_INVALID: RawCoord = RawCoord::MIN;
const RAW_COORD_MAX: RawCoord = RawCoord::MAX;
const RAW_COORD_MIN: RawCoord = -RAW_COORD_MAX;

/// Compact fixed-point integer representation of a geographical coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeoCoord(RawCoord);

impl GeoCoord {
    const INVALID: Self = Self(RAW_COORD_INVALID);

    pub const fn max() -> Self {
        Self(RAW_COORD_MAX)
    }

    pub const fn min() -> Self {
        Self(RAW_COORD_MIN)
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(raw)
    }

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for GeoCoord {
    fn default() -> Self {
        let res = Self::INVALID;
        debug_assert!(!res.is_valid());
        res
    }
}

impl PartialOrd for GeoCoord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self == other {
            Some(std::cmp::Ordering::Equal)
        } else if self.is_valid() && other.is_valid() {
            Some(self.to_raw().cmp(&other.to_raw()))
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Hash)]
pub struct LatCoord(GeoCoord);

impl LatCoord {
    const RAD_MAX: f64 = std::f64::consts::FRAC_PI_2;
    const RAD_MIN: f64 = -std::f64::consts::FRAC_PI_2;
    const TO_RAD: f64 =
        (Self::RAD_MAX - Self::RAD_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);

    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;
    const TO_DEG: f64 =
        (Self::DEG_MAX - Self::DEG_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);
    const FROM_DEG: f64 =
        (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

    pub const fn max() -> Self {
        Self(GeoCoord::max())
    }

    pub const fn min() -> Self {
        Self(GeoCoord::min())
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0.to_raw()
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(GeoCoord::from_raw(raw))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    pub fn to_rad(self) -> f64 {
        if self.is_valid() {
            f64::from(self.to_raw()) * Self::TO_RAD
        } else {
            f64::NAN
        }
    }

    pub fn to_deg(self) -> f64 {
        if self.is_valid() {
            f64::from(self.to_raw()) * Self::TO_DEG
        } else {
            f64::NAN
        }
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        let raw = f64::round(deg * Self::FROM_DEG) as RawCoord;
        let res = Self::from_raw(raw);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self::from_deg(deg))
        } else {
            None
        }
    }
}

impl std::fmt::Display for LatCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Hash)]
pub struct LngCoord(GeoCoord);

impl LngCoord {
    const RAD_MAX: f64 = std::f64::consts::PI;
    const RAD_MIN: f64 = -std::f64::consts::PI;
    const TO_RAD: f64 =
        (Self::RAD_MAX - Self::RAD_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);

    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;
    const TO_DEG: f64 =
        (Self::DEG_MAX - Self::DEG_MIN) / (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64);
    const FROM_DEG: f64 =
        (RAW_COORD_MAX as f64 - RAW_COORD_MIN as f64) / (Self::DEG_MAX - Self::DEG_MIN);

    pub const fn max() -> Self {
        Self(GeoCoord::max())
    }

    pub const fn min() -> Self {
        Self(GeoCoord::min())
    }

    pub const fn to_raw(self) -> RawCoord {
        self.0.to_raw()
    }

    pub const fn from_raw(raw: RawCoord) -> Self {
        Self(GeoCoord::from_raw(raw))
    }

    pub fn is_valid(self) -> bool {
        self.0.is_valid()
    }

    pub fn to_rad(self) -> f64 {
        if self.is_valid() {
            f64::from(self.to_raw()) * Self::TO_RAD
        } else {
            f64::NAN
        }
    }

    pub fn to_deg(self) -> f64 {
        if self.is_valid() {
            f64::from(self.to_raw()) * Self::TO_DEG
        } else {
            f64::NAN
        }
    }

    pub fn from_deg<T: Into<f64>>(deg: T) -> Self {
        let deg = deg.into();
        debug_assert!(deg >= Self::DEG_MIN);
        debug_assert!(deg <= Self::DEG_MAX);
        let raw = f64::round(deg * Self::FROM_DEG) as RawCoord;
        let res = Self::from_raw(raw);
        debug_assert!(res.is_valid());
        res
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self::from_deg(deg))
        } else {
            None
        }
    }
}

impl std::fmt::Display for LngCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.to_deg())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
    #[error("Invalid number of coordinates in '{0}'")]
    Format(String),
}

/// Compact internal representation of a geographical location on a (flat) map.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_valid() && self.lng.is_valid()
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(lat: LAT, lng: LNG) -> Self {
        Self::new(LatCoord::from_deg(lat), LngCoord::from_deg(lng))
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }

    pub fn parse_lat_lng_deg(lat_deg_str: &str, lng_deg_str: &str) -> Result<Self, ParseError> {
        let lat = lat_deg_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LatCoord::try_from_deg)
            .ok_or_else(|| ParseError::Latitude(lat_deg_str.to_owned()))?;
        let lng = lng_deg_str
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(LngCoord::try_from_deg)
            .ok_or_else(|| ParseError::Longitude(lng_deg_str.to_owned()))?;
        debug_assert!(lat.is_valid());
        debug_assert!(lng.is_valid());
        Ok(MapPoint::new(lat, lng))
    }
}

impl std::fmt::Display for MapPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

impl std::str::FromStr for MapPoint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat_deg_str, lng_deg_str) = s
            .split(',')
            .collect_tuple()
            .ok_or_else(|| ParseError::Format(s.to_owned()))?;
        MapPoint::parse_lat_lng_deg(lat_deg_str, lng_deg_str)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(pub f64);

impl Distance {
    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

/// Mean earth radius (IUGG)
pub const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_008.8);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of a spherical earth with the haversine formula.
    /// Reference: https://en.wikipedia.org/wiki/Haversine_formula
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Option<Distance> {
        if !p1.is_valid() || !p2.is_valid() {
            return None;
        }

        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let dlat_sin = ((lat2_rad - lat1_rad) / 2.0).sin();
        let dlng_sin = ((lng2_rad - lng1_rad) / 2.0).sin();

        let a = dlat_sin * dlat_sin + lat1_rad.cos() * lat2_rad.cos() * dlng_sin * dlng_sin;
        // Rounding errors might push a slightly above 1.0 for antipodal points
        let c = 2.0 * a.sqrt().min(1.0).asin();

        Some(Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * c))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    /// The smallest (non-wrapping) bounding box of all points.
    pub fn enclosing(points: impl IntoIterator<Item = MapPoint>) -> Option<Self> {
        points
            .into_iter()
            .filter(|pt| pt.is_valid())
            .fold(None, |bbox: Option<(RawCoord, RawCoord, RawCoord, RawCoord)>, pt| {
                let (lat, lng) = (pt.lat().to_raw(), pt.lng().to_raw());
                Some(match bbox {
                    None => (lat, lng, lat, lng),
                    Some((min_lat, min_lng, max_lat, max_lng)) => (
                        min_lat.min(lat),
                        min_lng.min(lng),
                        max_lat.max(lat),
                        max_lng.max(lng),
                    ),
                })
            })
            .map(|(min_lat, min_lng, max_lat, max_lng)| {
                Self::new(
                    MapPoint::new(LatCoord::from_raw(min_lat), LngCoord::from_raw(min_lng)),
                    MapPoint::new(LatCoord::from_raw(max_lat), LngCoord::from_raw(max_lng)),
                )
            })
    }

    /// A bounding box that contains the circle around `center`.
    ///
    /// Circles that reach a pole cover the whole longitude range.
    /// Circles that cross the antimeridian result in an inverse box.
    pub fn centered_around(center: MapPoint, radius: Distance) -> Self {
        debug_assert!(center.is_valid());
        debug_assert!(radius.is_valid());
        let (lat_deg, lng_deg) = center.to_lat_lng_deg();
        let dlat_deg = (radius.to_meters() / MEAN_EARTH_RADIUS.to_meters()).to_degrees();
        let min_lat_deg = lat_deg - dlat_deg;
        let max_lat_deg = lat_deg + dlat_deg;
        if min_lat_deg <= LatCoord::DEG_MIN || max_lat_deg >= LatCoord::DEG_MAX {
            return Self::new(
                MapPoint::new(
                    LatCoord::from_deg(min_lat_deg.max(LatCoord::DEG_MIN)),
                    LngCoord::min(),
                ),
                MapPoint::new(
                    LatCoord::from_deg(max_lat_deg.min(LatCoord::DEG_MAX)),
                    LngCoord::max(),
                ),
            );
        }
        // The widest extent of the circle is not at the latitude of
        // the center, but the (cheaper) extent at the latitude closest
        // to the pole is always larger.
        let max_abs_lat_rad = min_lat_deg.abs().max(max_lat_deg.abs()).to_radians();
        let dlng_deg = dlat_deg / max_abs_lat_rad.cos();
        if dlng_deg >= LngCoord::DEG_MAX {
            return Self::new(
                MapPoint::new(LatCoord::from_deg(min_lat_deg), LngCoord::min()),
                MapPoint::new(LatCoord::from_deg(max_lat_deg), LngCoord::max()),
            );
        }
        let wrap_lng = |deg: f64| {
            if deg < LngCoord::DEG_MIN {
                deg + 360.0
            } else if deg > LngCoord::DEG_MAX {
                deg - 360.0
            } else {
                deg
            }
        };
        Self::new(
            MapPoint::new(
                LatCoord::from_deg(min_lat_deg),
                LngCoord::from_deg(wrap_lng(lng_deg - dlng_deg)),
            ),
            MapPoint::new(
                LatCoord::from_deg(max_lat_deg),
                LngCoord::from_deg(wrap_lng(lng_deg + dlng_deg)),
            ),
        )
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    /// Boxes with a south-west longitude greater than the
    /// north-east longitude wrap around the antimeridian.
    pub fn is_inverse(&self) -> bool {
        self.sw.lng() > self.ne.lng()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        debug_assert!(self.is_valid());
        debug_assert!(pt.is_valid());
        if pt.lat() < self.sw.lat() || pt.lat() > self.ne.lat() {
            return false;
        }
        if self.sw.lng() <= self.ne.lng() {
            // regular (inclusive)
            pt.lng() >= self.sw.lng() && pt.lng() <= self.ne.lng()
        } else {
            // inverse (exclusive)
            !(pt.lng() > self.ne.lng() && pt.lng() < self.sw.lng())
        }
    }
}

impl std::fmt::Display for MapBbox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

use dalmatia_entities::{
    geo::{Distance, MapPoint},
    time::Timestamp,
    url::{ParseError, Url},
};

use crate::usecases::Error;

/// Completes incomplete URLs before parsing
pub fn parse_lazy_url<S>(from: S) -> Result<Option<Url>, ParseError>
where
    S: AsRef<str>,
{
    let from = from.as_ref().trim();
    if from.is_empty() {
        return Ok(None);
    }
    let url = if from.contains("://") {
        Url::parse(from)?
    } else {
        // Add the missing protocol by assuming https
        Url::parse(&format!("https://{from}"))?
    };
    Ok(Some(url))
}

fn required<'a>(param: Option<&'a str>, name: &'static str) -> Result<&'a str, Error> {
    param
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingParameter(name))
}

pub fn parse_position(lat: Option<&str>, lng: Option<&str>) -> Result<MapPoint, Error> {
    let lat = required(lat, "lat")?;
    let lng = required(lng, "lng")?;
    MapPoint::parse_lat_lng_deg(lat, lng).map_err(|_| Error::InvalidPosition)
}

pub fn parse_radius(radius: Option<&str>) -> Result<Distance, Error> {
    let radius = required(radius, "radius")?
        .parse::<f64>()
        .map_err(|_| Error::InvalidRadius)?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(Error::InvalidRadius);
    }
    Ok(Distance::from_meters(radius))
}

pub fn parse_timestamp_param(param: Option<&str>) -> Result<Option<Timestamp>, Error> {
    param
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Timestamp>().map_err(|_| Error::InvalidTimestamp))
        .transpose()
}

/// Upper bound of a time range: a plain date includes the whole day.
pub fn parse_end_timestamp_param(param: Option<&str>) -> Result<Option<Timestamp>, Error> {
    param
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| Timestamp::parse_as_end(s).map_err(|_| Error::InvalidTimestamp))
        .transpose()
}

use std::{collections::HashMap, io};

use dalmatia_boundary as json;
use dalmatia_core::entities::geometry::Boundary;

use super::*;

/// Maps the name of a county to its id.
pub type CountyMap = HashMap<String, u32>;

const NAME_PROPERTY: &str = "NAME_2";
const COUNTY_PROPERTY: &str = "NAME_1";
const TYPE_PROPERTY: &str = "ENGTYPE_2";

fn string_property<'a>(properties: &'a json::JsonObject, key: &str) -> Option<&'a str> {
    properties
        .get(key)
        .and_then(|value| value.as_str())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn new_place_from_feature(
    feature: &json::Feature,
    counties: &CountyMap,
) -> Option<usecases::NewPlace> {
    let Some(properties) = feature.properties.as_ref() else {
        warn!("Skipping feature without properties");
        return None;
    };
    let Some(name) = string_property(properties, NAME_PROPERTY) else {
        warn!("Skipping feature without property {NAME_PROPERTY}");
        return None;
    };
    let Some(county_id) =
        string_property(properties, COUNTY_PROPERTY).and_then(|county| counties.get(county))
    else {
        info!("Skipping place '{name}' of an unknown county");
        return None;
    };
    let kind = match string_property(properties, TYPE_PROPERTY) {
        Some(kind) if kind.to_lowercase().contains("city") => PlaceKind::City,
        _ => PlaceKind::Municipality,
    };
    let Some(geometry) = feature.geometry.as_ref() else {
        warn!("Skipping place '{name}' without geometry");
        return None;
    };
    let boundary = match Boundary::try_from(geometry) {
        Ok(boundary) => boundary,
        Err(err) => {
            warn!("Skipping place '{name}' with invalid geometry: {err}");
            return None;
        }
    };
    Some(usecases::NewPlace {
        name: name.to_owned(),
        kind,
        county_id: *county_id,
        boundary,
    })
}

/// Creates or updates places from the features of a GeoJSON
/// feature collection.
pub fn import_places(
    connections: &sqlite::Connections,
    collection: &json::FeatureCollection,
    counties: &CountyMap,
) -> Result<usecases::ImportSummary> {
    let new_places: Vec<_> = collection
        .features
        .iter()
        .filter_map(|feature| new_place_from_feature(feature, counties))
        .collect();
    let skipped = collection.features.len() - new_places.len();
    let mut summary = connections
        .exclusive()?
        .transaction(|conn| usecases::import_places(conn, new_places))?;
    summary.skipped += skipped;
    info!(
        "Imported places: {} created, {} updated, {} skipped",
        summary.created, summary.updated, summary.skipped
    );
    Ok(summary)
}

pub fn import_places_from_reader(
    connections: &sqlite::Connections,
    reader: impl io::Read,
    counties: &CountyMap,
) -> Result<usecases::ImportSummary> {
    let collection: json::FeatureCollection = serde_json::from_reader(reader)?;
    import_places(connections, &collection, counties)
}

pub fn load_places(connections: &sqlite::Connections) -> Result<Vec<Place>> {
    let db = connections.shared()?;
    Ok(usecases::load_places(&db)?)
}

pub fn load_place_boundaries(connections: &sqlite::Connections) -> Result<json::FeatureCollection> {
    let places = load_places(connections)?;
    Ok(json::FeatureCollection {
        features: places.into_iter().map(json::Feature::from).collect(),
    })
}

pub fn load_categories(connections: &sqlite::Connections) -> Result<Vec<Category>> {
    let db = connections.shared()?;
    Ok(usecases::load_categories(&db)?)
}

pub fn create_category(connections: &sqlite::Connections, name: &str) -> Result<Category> {
    let category = connections
        .exclusive()?
        .transaction(|conn| usecases::create_category(conn, name))?;
    info!("Created category '{}'", category.name);
    Ok(category)
}

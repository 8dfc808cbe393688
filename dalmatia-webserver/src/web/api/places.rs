use super::*;

#[get("/places")]
pub fn get_places(db: &State<Connections>) -> Result<Vec<json::Place>> {
    let places = flows::load_places(db)?;
    Ok(Json(places.into_iter().map(json::Place::from).collect()))
}

#[get("/places/geo")]
pub fn get_place_boundaries(db: &State<Connections>) -> Result<json::FeatureCollection> {
    Ok(Json(flows::load_place_boundaries(db)?))
}

#[get("/categories")]
pub fn get_categories(db: &State<Connections>) -> Result<Vec<json::Category>> {
    let categories = flows::load_categories(db)?;
    Ok(Json(
        categories.into_iter().map(json::Category::from).collect(),
    ))
}

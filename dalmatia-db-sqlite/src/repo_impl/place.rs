use super::*;

fn into_new_place(place: &Place) -> Result<models::NewPlace> {
    let Place {
        id,
        name,
        kind,
        county_id,
        boundary,
    } = place;
    let geometry = json::Geometry::from(boundary);
    let boundary = serde_json::to_string(&geometry).map_err(anyhow::Error::from)?;
    Ok(models::NewPlace {
        id: id.to_string(),
        name: name.clone(),
        kind: kind.to_string(),
        county_id: (*county_id).into(),
        boundary,
    })
}

fn load_place(entity: models::PlaceEntity) -> Result<Place> {
    let models::PlaceEntity {
        rowid: _,
        id,
        name,
        kind,
        county_id,
        boundary,
    } = entity;
    let geometry: json::Geometry =
        serde_json::from_str(&boundary).map_err(anyhow::Error::from)?;
    let boundary = Boundary::try_from(&geometry)
        .map_err(|err| anyhow!("Invalid boundary of place '{name}': {err}"))?;
    let kind = kind
        .parse()
        .map_err(|_| anyhow!("Invalid kind of place '{name}': {kind}"))?;
    let county_id = u32::try_from(county_id)
        .map_err(|_| anyhow!("Invalid county of place '{name}': {county_id}"))?;
    Ok(Place {
        id: id.into(),
        name,
        kind,
        county_id,
        boundary,
    })
}

pub(super) fn create_place(conn: &mut SqliteConnection, place: Place) -> Result<()> {
    let new_place = into_new_place(&place)?;
    diesel::insert_into(schema::places::table)
        .values(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn update_place(conn: &mut SqliteConnection, place: &Place) -> Result<()> {
    use schema::places::dsl;
    let new_place = into_new_place(place)?;
    let count = diesel::update(dsl::places.filter(dsl::id.eq(place.id.as_str())))
        .set(&new_place)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

pub(super) fn get_place(conn: &mut SqliteConnection, id: &str) -> Result<Place> {
    use schema::places::dsl;
    let entity = dsl::places
        .filter(dsl::id.eq(id))
        .first::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?;
    load_place(entity)
}

pub(super) fn try_get_place_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> Result<Option<Place>> {
    use schema::places::dsl;
    dsl::places
        .filter(dsl::name.eq(name))
        .first::<models::PlaceEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_place)
        .transpose()
}

pub(super) fn all_places(conn: &mut SqliteConnection) -> Result<Vec<Place>> {
    use schema::places::dsl;
    dsl::places
        .order_by(dsl::name)
        .load::<models::PlaceEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_place)
        .collect()
}

pub(super) fn all_place_names(conn: &mut SqliteConnection) -> Result<Vec<(Id, String)>> {
    use schema::places::dsl;
    Ok(dsl::places
        .select((dsl::id, dsl::name))
        .order_by(dsl::name)
        .load::<(String, String)>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(|(id, name)| (id.into(), name))
        .collect())
}

pub(super) fn count_places(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::places::dsl;
    Ok(dsl::places
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

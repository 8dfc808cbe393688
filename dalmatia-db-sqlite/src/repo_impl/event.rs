use diesel::sql_types::{BigInt, Double, Nullable, Text};

use super::*;

fn into_new_event(event: &Event) -> models::NewEvent {
    let Event {
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
        rating: _,
    } = event;
    let (lat, lng) = pos.to_lat_lng_deg();
    models::NewEvent {
        id: id.to_string(),
        title: title.clone(),
        description: description.clone(),
        place_id: place_id.to_string(),
        category_id: category_id.to_string(),
        price: *price,
        date_start: start.as_secs(),
        date_end: end.as_secs(),
        lat,
        lng,
        organizer_name: organizer.name.clone(),
        organizer_surname: organizer.surname.clone(),
        organizer_email: organizer.email.clone(),
        organizer_phone: organizer.phone.clone(),
        image_url: image_url.as_ref().map(ToString::to_string),
        created_by: created_by.to_string(),
    }
}

fn load_event(entity: models::EventEntity) -> Result<Event> {
    let models::EventEntity {
        rowid: _,
        id,
        title,
        description,
        place_id,
        category_id,
        price,
        date_start,
        date_end,
        lat,
        lng,
        organizer_name,
        organizer_surname,
        organizer_email,
        organizer_phone,
        image_url,
        created_by,
        average_rating,
        reviews_count,
    } = entity;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid position of event {id}: {lat},{lng}"))?;
    let image_url = image_url.and_then(|url| {
        url.parse()
            .map_err(|err| {
                // This should never happen if URLs have been validated properly on insert
                log::error!("Failed to load image URL of event {id}: {err}");
            })
            .ok()
    });
    Ok(Event {
        id: id.into(),
        title,
        description,
        place_id: place_id.into(),
        category_id: category_id.into(),
        price,
        start: load_timestamp_secs(date_start)?,
        end: load_timestamp_secs(date_end)?,
        pos,
        organizer: Organizer {
            name: organizer_name,
            surname: organizer_surname,
            email: organizer_email,
            phone: organizer_phone,
        },
        image_url,
        created_by: created_by.into(),
        rating: RatingSummary {
            average: AvgRatingValue::from(average_rating),
            count: u32::try_from(reviews_count).unwrap_or_default(),
        },
    })
}

fn load_events(entities: Vec<models::EventEntity>) -> Result<Vec<Event>> {
    entities.into_iter().map(load_event).collect()
}

pub(super) fn create_event(conn: &mut SqliteConnection, ev: Event) -> Result<()> {
    let new_event = into_new_event(&ev);
    diesel::insert_into(schema::events::table)
        .values(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

pub(super) fn update_event(conn: &mut SqliteConnection, ev: &Event) -> Result<()> {
    use schema::events::dsl;
    let new_event = into_new_event(ev);
    let count = diesel::update(dsl::events.filter(dsl::id.eq(ev.id.as_str())))
        .set(&new_event)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

// Dependent rows are deleted explicitly instead of relying
// on foreign key enforcement for the current connection.
pub(super) fn delete_event(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::{events::dsl as e_dsl, reviews::dsl as r_dsl, wishlist::dsl as w_dsl};
    conn.transaction::<_, DieselError, _>(|conn| {
        diesel::delete(r_dsl::reviews.filter(r_dsl::event_id.eq(id))).execute(conn)?;
        diesel::delete(w_dsl::wishlist.filter(w_dsl::event_id.eq(id))).execute(conn)?;
        let count = diesel::delete(e_dsl::events.filter(e_dsl::id.eq(id))).execute(conn)?;
        debug_assert!(count <= 1);
        if count == 0 {
            return Err(DieselError::NotFound);
        }
        Ok(())
    })
    .map_err(from_diesel_err)
}

pub(super) fn get_events_chronologically(
    conn: &mut SqliteConnection,
    ids: &[&str],
) -> Result<Vec<Event>> {
    use schema::events::dsl;
    let rows = dsl::events
        .filter(dsl::id.eq_any(ids))
        .order_by((dsl::date_start, dsl::id))
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(rows.len() <= ids.len());
    load_events(rows)
}

pub(super) fn get_event(conn: &mut SqliteConnection, id: &str) -> Result<Event> {
    use schema::events::dsl;
    let row = dsl::events
        .filter(dsl::id.eq(id))
        .first::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    load_event(row)
}

pub(super) fn filter_events_chronologically(
    conn: &mut SqliteConnection,
    filter: &EventFilter,
) -> Result<Vec<Event>> {
    use schema::events::dsl;
    let EventFilter {
        bbox,
        category_id,
        start_min,
        end_max,
        created_by,
    } = filter;
    let mut query = dsl::events.into_boxed();
    if let Some(bbox) = bbox {
        let (sw_lat, sw_lng) = bbox.south_west().to_lat_lng_deg();
        let (ne_lat, ne_lng) = bbox.north_east().to_lat_lng_deg();
        query = query.filter(dsl::lat.between(sw_lat, ne_lat));
        if bbox.is_inverse() {
            // Crossing the antimeridian
            query = query.filter(dsl::lng.ge(sw_lng).or(dsl::lng.le(ne_lng)));
        } else {
            query = query.filter(dsl::lng.between(sw_lng, ne_lng));
        }
    }
    if let Some(category_id) = category_id {
        query = query.filter(dsl::category_id.eq(category_id.as_str()));
    }
    if let Some(start_min) = start_min {
        query = query.filter(dsl::date_start.ge(start_min.as_secs()));
    }
    if let Some(end_max) = end_max {
        query = query.filter(dsl::date_end.le(end_max.as_secs()));
    }
    if let Some(created_by) = created_by {
        query = query.filter(dsl::created_by.eq(created_by.as_str()));
    }
    let rows = query
        .order_by((dsl::date_start, dsl::id))
        .load::<models::EventEntity>(conn)
        .map_err(from_diesel_err)?;
    load_events(rows)
}

pub(super) fn count_events(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::events::dsl;
    Ok(dsl::events
        .select(diesel::dsl::count(dsl::rowid))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

#[derive(QueryableByName)]
struct RatingAggregate {
    #[diesel(sql_type = Nullable<Double>)]
    average: Option<f64>,
    #[diesel(sql_type = BigInt)]
    count: i64,
}

pub(super) fn recalculate_event_rating(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<RatingSummary> {
    use schema::events::dsl;
    let RatingAggregate { average, count } = diesel::sql_query(
        "SELECT AVG(rating) AS average, COUNT(*) AS count FROM reviews WHERE event_id = ?",
    )
    .bind::<Text, _>(id)
    .get_result(conn)
    .map_err(from_diesel_err)?;
    let summary = RatingSummary {
        average: average
            .map(|avg| AvgRatingValue::from(avg).clamp())
            .unwrap_or_else(AvgRatingValue::none),
        count: u32::try_from(count).map_err(anyhow::Error::from)?,
    };
    let updated = diesel::update(dsl::events.filter(dsl::id.eq(id)))
        .set((
            dsl::average_rating.eq(f64::from(summary.average)),
            dsl::reviews_count.eq(i64::from(summary.count)),
        ))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(updated <= 1);
    if updated == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(summary)
}

use super::*;

pub(super) fn create_category(conn: &mut SqliteConnection, category: Category) -> Result<()> {
    let Category { id, name } = &category;
    diesel::insert_into(schema::categories::table)
        .values(&models::NewCategory {
            id: id.as_str(),
            name,
        })
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_category(entity: models::CategoryEntity) -> Category {
    let models::CategoryEntity { rowid: _, id, name } = entity;
    Category {
        id: id.into(),
        name,
    }
}

pub(super) fn get_category(conn: &mut SqliteConnection, id: &str) -> Result<Category> {
    use schema::categories::dsl;
    dsl::categories
        .filter(dsl::id.eq(id))
        .first::<models::CategoryEntity>(conn)
        .map(load_category)
        .map_err(from_diesel_err)
}

pub(super) fn all_categories(conn: &mut SqliteConnection) -> Result<Vec<Category>> {
    use schema::categories::dsl;
    Ok(dsl::categories
        .order_by(dsl::name)
        .load::<models::CategoryEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_category)
        .collect())
}

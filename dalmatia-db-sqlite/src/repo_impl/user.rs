use super::*;

pub(super) fn create_user(conn: &mut SqliteConnection, u: &User) -> Result<()> {
    let new_user = models::NewUser {
        id: u.id.as_str(),
        username: &u.username,
        email: &u.email,
        password: u.password.as_ref(),
    };
    diesel::insert_into(schema::users::table)
        .values(&new_user)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn load_user(entity: models::UserEntity) -> User {
    let models::UserEntity {
        rowid: _,
        id,
        username,
        email,
        password,
    } = entity;
    User {
        id: id.into(),
        username,
        email,
        // Already hashed
        password: password.into(),
    }
}

pub(super) fn get_user(conn: &mut SqliteConnection, id: &str) -> Result<User> {
    use schema::users::dsl;
    dsl::users
        .filter(dsl::id.eq(id))
        .first::<models::UserEntity>(conn)
        .map(load_user)
        .map_err(from_diesel_err)
}

pub(super) fn try_get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::username.eq(username))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user))
}

pub(super) fn try_get_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<User>> {
    use schema::users::dsl;
    Ok(dsl::users
        .filter(dsl::email.eq(email))
        .first::<models::UserEntity>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(load_user))
}

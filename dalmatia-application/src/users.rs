use super::*;

pub fn register_user(
    connections: &sqlite::Connections,
    new_user: usecases::NewUser,
) -> Result<User> {
    let user = connections
        .exclusive()?
        .transaction(|conn| usecases::register_user(conn, new_user))?;
    info!("Registered new user '{}'", user.username);
    Ok(user)
}

pub fn login(
    connections: &sqlite::Connections,
    credentials: usecases::Credentials,
) -> Result<User> {
    let db = connections.shared()?;
    Ok(usecases::login(&db, credentials)?)
}

pub fn get_user(connections: &sqlite::Connections, id: &str) -> Result<User> {
    let db = connections.shared()?;
    Ok(usecases::get_user(&db, id)?)
}

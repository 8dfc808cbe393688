use super::prelude::*;
use crate::{
    entities::password::Password,
    repositories::Error as RepoError,
    util::validate::{is_valid_email, is_valid_username},
};

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn register_user<R: UserRepo>(repo: &R, new_user: NewUser) -> Result<User> {
    let NewUser {
        username,
        email,
        password,
    } = new_user;
    let username = username.trim();
    if !is_valid_username(username) {
        return Err(Error::Username);
    }
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        return Err(Error::Email);
    }
    let password = password.parse::<Password>()?;
    if repo.try_get_user_by_username(username)?.is_some()
        || repo.try_get_user_by_email(&email)?.is_some()
    {
        log::info!("User '{username}' or email '{email}' already exists");
        return Err(Error::UserExists);
    }
    let user = User {
        id: Id::new(),
        username: username.to_owned(),
        email,
        password,
    };
    repo.create_user(&user).map_err(|err| match err {
        RepoError::AlreadyExists => Error::UserExists,
        err => Error::Repo(err),
    })?;
    log::debug!("Registered new user '{}'", user.username);
    Ok(user)
}

pub fn login<R: UserRepo>(repo: &R, credentials: Credentials) -> Result<User> {
    let Credentials { username, password } = credentials;
    match repo.try_get_user_by_username(username.trim())? {
        Some(user) if user.password.verify(password) => Ok(user),
        _ => {
            log::info!("Failed login attempt of user '{username}'");
            Err(Error::Credentials)
        }
    }
}

/// Loads the user of an authenticated request.
pub fn get_user<R: UserRepo>(repo: &R, id: &str) -> Result<User> {
    repo.get_user(id).map_err(|err| match err {
        RepoError::NotFound => Error::Unauthorized,
        err => Error::Repo(err),
    })
}

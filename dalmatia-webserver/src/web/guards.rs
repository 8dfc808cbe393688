use dalmatia_application::{error::ErrorKind, prelude as flows};
use dalmatia_core::entities::id::Id;
use dalmatia_db_sqlite::Connections;
use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::web::jwt;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let x: Vec<_> = auth_header_val.split(' ').collect();
    if x.len() == 2 && x[0] == "Bearer" {
        Some(x[1])
    } else {
        None
    }
}

/// An authenticated and still existing user.
#[derive(Debug)]
pub struct Account {
    user_id: Id,
    username: String,
}

impl Account {
    pub fn user_id(&self) -> &Id {
        &self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

// Only a token of a user that no longer exists is unauthorized.
fn status_of_rejected_user(
    kind: ErrorKind,
    user_id: &str,
    err: &dyn std::fmt::Display,
) -> Status {
    if matches!(kind, ErrorKind::Unauthorized | ErrorKind::NotFound) {
        debug!("Rejecting token of unknown user {user_id}: {err}");
        Status::Unauthorized
    } else {
        error!("Failed to load user {user_id}: {err}");
        Status::InternalServerError
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let jwt_state = try_outcome!(request.guard::<&State<jwt::JwtState>>().await);
        let connections = try_outcome!(request.guard::<&State<Connections>>().await);
        let Some(user_id) = request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .find_map(|token| jwt_state.validate_token_and_get_user_id(token).ok())
        else {
            return Outcome::Error((Status::Unauthorized, ()));
        };
        match flows::get_user(connections, &user_id) {
            Ok(user) => Outcome::Success(Account {
                user_id: user.id,
                username: user.username,
            }),
            Err(err) => {
                let status = status_of_rejected_user(err.kind(), &user_id, &err);
                Outcome::Error((status, ()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_tokens() {
        assert_eq!(Some("abc"), get_bearer_token("Bearer abc"));
        assert_eq!(None, get_bearer_token("Basic abc"));
        assert_eq!(None, get_bearer_token("Bearer"));
        assert_eq!(None, get_bearer_token("Bearer a b"));
    }

    #[test]
    fn storage_failures_are_not_unauthorized() {
        assert_eq!(
            Status::Unauthorized,
            status_of_rejected_user(ErrorKind::Unauthorized, "u1", &"unknown user")
        );
        assert_eq!(
            Status::InternalServerError,
            status_of_rejected_user(ErrorKind::Internal, "u1", &"database is locked")
        );
    }
}

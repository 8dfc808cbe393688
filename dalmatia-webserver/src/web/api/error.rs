use super::json_error_response;
use anyhow::anyhow;
use dalmatia_application::error::{AppError, ErrorKind};
use dalmatia_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => Self::OtherWithStatus(
                anyhow!("Missing or invalid fields: {err}"),
                Status::BadRequest,
            ),
        }
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<UsecaseError> for Error {
    fn from(err: UsecaseError) -> Self {
        Self::App(err.into())
    }
}

fn status_of(kind: ErrorKind) -> Status {
    match kind {
        ErrorKind::BadRequest => Status::BadRequest,
        ErrorKind::NotFound => Status::NotFound,
        ErrorKind::Conflict => Status::Conflict,
        ErrorKind::Unauthorized => Status::Unauthorized,
        ErrorKind::Forbidden => Status::Forbidden,
        ErrorKind::Internal => Status::InternalServerError,
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => match err.kind() {
                ErrorKind::Internal => {
                    error!("Error: {err}");
                    Err(Status::InternalServerError)
                }
                kind => json_error_response(req, &err, status_of(kind)),
            },
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}

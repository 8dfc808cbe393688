use dalmatia_core::{repositories::Error as RepoError, usecases::Error as UsecaseError};
use std::io;
use thiserror::Error;

pub use dalmatia_core::usecases::ErrorKind;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Usecase(#[from] UsecaseError),
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Usecase(err.into())
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usecase(err) => err.kind(),
            // Malformed input files
            Self::Serialize(_) => ErrorKind::BadRequest,
            Self::Io(_) | Self::Other(_) => ErrorKind::Internal,
        }
    }
}

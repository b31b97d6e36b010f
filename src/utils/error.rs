//! Error handling.

use crate::backend::auth::AuthError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Duplicate account in configuration: {0}")]
    DuplicateAccount(String),
}

pub type Result<T> = std::result::Result<T, Error>;

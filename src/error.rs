use crate::{auth::MissingRoleError, repository};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(&'static str),

    #[error("validation error: {field} too long {len}/{max_len}B")]
    ValidationFieldTooLong {
        field: &'static str,
        len: usize,
        max_len: usize,
    },

    #[error("auth error: {0}")]
    Auth(#[from] MissingRoleError),

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::ValidationFieldTooLong { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Auth(_) => StatusCode::FORBIDDEN,
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
        .into_response()
    }
}

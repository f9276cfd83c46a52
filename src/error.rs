use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

use crate::views;

#[derive(Debug, ThisError)]
pub enum PortalError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("Password hash error: {0}")]
    PasswordHash(String),

    #[error("Background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Configuration error: {0}")]
    Config(#[from] figment::Error),
}

impl From<argon2::password_hash::Error> for PortalError {
    fn from(e: argon2::password_hash::Error) -> Self {
        PortalError::PasswordHash(e.to_string())
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            views::error_page("Something went wrong. Please try again."),
        )
            .into_response()
    }
}

//! Error types for acctdeck-api

use acctdeck_core::{CoreError, ErrorSeverity};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal server error")]
    InternalError,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        let details = error.to_details();
        match error.severity() {
            ErrorSeverity::Info => log::info!("{}", details),
            ErrorSeverity::Error => log::error!("{}", details),
        }

        match error {
            CoreError::AccountNotFound { id } => ApiError::NotFound {
                resource: format!("account {}", id),
            },
            CoreError::LogoutFailed { .. } => ApiError::InternalError,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("Request failed: {}", self);
        (self.status(), self.to_string()).into_response()
    }
}

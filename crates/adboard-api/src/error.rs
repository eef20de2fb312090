use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use adboard_core::error::AppError;

use crate::dto::ErrorResponse;

const DEFAULT_FAILURE: &str = "Something went wrong";

/// Wrapper so we can implement `IntoResponse` for `AppError`.
///
/// `failure` is the message shown for internal errors; their details are
/// logged, never returned.
pub struct ApiError {
    error: AppError,
    failure: &'static str,
    /// Replaces the default 400 for client errors that carry their own status.
    status: Option<StatusCode>,
}

impl ApiError {
    pub fn new(error: AppError, failure: &'static str) -> Self {
        Self {
            error,
            failure,
            status: None,
        }
    }

    /// `map_err` adapter attaching a route-specific failure message.
    pub fn context(failure: &'static str) -> impl FnOnce(AppError) -> Self {
        move |error| Self::new(error, failure)
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self::new(error, DEFAULT_FAILURE)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let mut err = Self::new(AppError::Validation(rejection.body_text()), DEFAULT_FAILURE);
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            err.status = Some(StatusCode::PAYLOAD_TOO_LARGE);
        }
        err
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if !self.error.is_client_error() {
            tracing::error!(error = %self.error, "{}", self.failure);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                axum::Json(ErrorResponse::new(self.failure)),
            )
                .into_response();
        }

        tracing::debug!(error = %self.error, "Rejected request");
        let (status, message) = match self.error {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string()),
            AppError::InvalidToken(_) => (StatusCode::FORBIDDEN, "Invalid token".to_string()),
            AppError::Conflict(msg) | AppError::Validation(msg) => {
                (self.status.unwrap_or(StatusCode::BAD_REQUEST), msg)
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, self.failure.to_string()),
        };

        (status, axum::Json(ErrorResponse::new(message))).into_response()
    }
}

//! Error handling for the application

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::pricing::responses::ErrorResponse;

/// Message returned when a quote request cannot be read
pub const QUOTE_FAILED_MESSAGE: &str = "Unable to generate quote from provided input.";

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Request body must be valid JSON: {0}")]
    MalformedBody(#[source] serde_json::Error),

    #[error("Unable to read request body: {0}")]
    UnreadableBody(#[from] BytesRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MalformedBody(e) => {
                tracing::warn!("Rejected quote request body: {}", e);
                StatusCode::BAD_REQUEST
            }
            AppError::UnreadableBody(rejection) => {
                tracing::warn!("Failed to read quote request body: {}", rejection);
                rejection.status()
            }
        };

        let body = ErrorResponse::new(QUOTE_FAILED_MESSAGE).with_error(self.to_string());
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

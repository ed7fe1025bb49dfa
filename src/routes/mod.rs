//! Gateway-level route handlers

pub mod health;

use axum::{
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json},
    routing::get,
    Router,
};

use crate::pricing::responses::ErrorResponse;
use crate::AppState;

/// Service-level routes (health, 404 fallback)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            get(health::health)
                .head(route_not_found)
                .fallback(route_not_found),
        )
        .fallback(route_not_found)
}

/// JSON 404 for unknown paths and unsupported methods
pub async fn route_not_found(method: Method, uri: Uri) -> impl IntoResponse {
    let message = format!("Route {} {} not found.", method, uri.path());
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message)))
}

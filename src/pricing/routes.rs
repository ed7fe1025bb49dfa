//! Quote API route handlers

use axum::{
    body::Bytes,
    extract::rejection::BytesRejection,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::routes::route_not_found;
use crate::AppState;

use super::calculators::calculate_quote;
use super::models::QuoteInput;
use super::requests::QuoteRequest;
use super::responses::{DefaultsResponse, QuoteResponse};

/// Routes under `/api`
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/defaults",
            get(defaults)
                .head(route_not_found)
                .fallback(route_not_found),
        )
        .route("/api/quote", post(create_quote).fallback(route_not_found))
}

/// Default quote input, for pre-filling client forms
pub async fn defaults() -> Json<DefaultsResponse> {
    Json(DefaultsResponse {
        defaults: QuoteInput::default(),
    })
}

/// Price the JSON body. An empty body prices the defaults.
pub async fn create_quote(
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<QuoteResponse>> {
    let body = body?;
    let request = parse_quote_body(&body)?;
    let quote = calculate_quote(&request);

    tracing::debug!(
        total = quote.total,
        confidence = %quote.ai_confidence,
        "Quote computed"
    );

    Ok(Json(QuoteResponse {
        success: true,
        quote,
    }))
}

fn parse_quote_body(body: &[u8]) -> Result<QuoteRequest> {
    if body.is_empty() {
        return Ok(QuoteRequest::default());
    }

    let value: Value = serde_json::from_slice(body).map_err(AppError::MalformedBody)?;
    Ok(QuoteRequest::from_value(value))
}

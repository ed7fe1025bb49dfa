//! Liveness endpoint

use axum::response::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Name reported by the health check
pub const SERVICE_NAME: &str = "project-quote-backend";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
}

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "project-quote-backend");
        assert!(body.timestamp.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&body.timestamp).is_ok());
    }
}

//! Structural detailing quote backend.
//!
//! A pure quote calculator ([`pricing`]) behind a small JSON API.

pub mod config;
pub mod cors;
pub mod error;
pub mod pricing;
pub mod routes;

use axum::{extract::DefaultBodyLimit, http::HeaderValue, middleware, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Config;

/// Largest request body read by any handler
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Shared state handed to handlers and middleware
#[derive(Clone)]
pub struct AppState {
    pub cors_origin: HeaderValue,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            cors_origin: config.cors_origin.clone(),
        }
    }
}

/// Build the full application router
pub fn build_app(config: &Config) -> Router {
    let state = AppState::new(config);

    Router::new()
        .merge(pricing::router())
        .merge(routes::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state.clone(), cors::cors)),
        )
        .with_state(state)
}

/// Initialize logging. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("project_quote_backend=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}

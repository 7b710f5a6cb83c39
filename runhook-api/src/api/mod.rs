//! API Module
//!
//! HTTP API layer for the service.
//! Each submodule handles one endpoint.

pub mod error;
pub mod health;
pub mod invoke;
pub mod token;

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;

/// Create the main API router with all endpoints
pub fn create_router(config: ApiConfig) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Token resolution
        .route("/resolve", get(token::resolve_token))
        // Job trigger
        .route("/invoke", get(invoke::invoke_job))
        // Add state and middleware
        .with_state(Arc::new(config))
        .layer(TraceLayer::new_for_http())
}

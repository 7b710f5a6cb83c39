//! Token API Handler

use std::sync::Arc;

use axum::extract::State;

use crate::api::error::ApiResult;
use crate::config::ApiConfig;
use crate::service::trigger_service;

/// GET /resolve
/// Return the metadata server's token document verbatim
pub async fn resolve_token(State(config): State<Arc<ApiConfig>>) -> ApiResult<String> {
    tracing::debug!("Resolving access token");

    let body = trigger_service::resolve_raw(&config).await?;

    Ok(body)
}

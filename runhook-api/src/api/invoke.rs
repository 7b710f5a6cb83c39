//! Invoke API Handler

use std::sync::Arc;

use axum::{extract::State, http::StatusCode};

use crate::api::error::ApiResult;
use crate::config::ApiConfig;
use crate::service::trigger_service;

/// GET /invoke
/// Trigger one run of the configured job
///
/// Answers 200 with an empty body once the job-run API has responded,
/// whatever that response was. The outcome is only logged.
pub async fn invoke_job(State(config): State<Arc<ApiConfig>>) -> ApiResult<StatusCode> {
    tracing::info!(
        "Invoking job {} in project {} ({})",
        config.target.job,
        config.target.project,
        config.target.region
    );

    trigger_service::trigger_job(&config).await?;

    Ok(StatusCode::OK)
}

//! Trigger Service
//!
//! Token resolution and job triggering. Every call builds its own HTTP
//! clients and drops them on return; nothing is shared between requests.

use runhook_client::{ClientError, MetadataClient, RunClient, RunOutcome};
use runhook_core::dto::run::RunRequest;

use crate::config::ApiConfig;

/// Fetch the token document from the metadata server, unparsed
pub async fn resolve_raw(config: &ApiConfig) -> Result<String, ClientError> {
    MetadataClient::new(config.metadata_url.as_str())
        .fetch_raw()
        .await
}

/// Resolve a token, then trigger one run of the configured job
///
/// The two calls are strictly sequential. No run is attempted when the
/// token cannot be resolved or parsed.
pub async fn trigger_job(config: &ApiConfig) -> Result<RunOutcome, ClientError> {
    let token = MetadataClient::new(config.metadata_url.as_str())
        .resolve()
        .await?;

    let request = RunRequest::default_trigger();

    let outcome = RunClient::new(config.run_endpoint.as_str(), config.target.clone())
        .run_job(&token, &request)
        .await?;

    match &outcome {
        RunOutcome::Accepted { status } => {
            tracing::info!(
                "Job {} accepted run request (status {})",
                config.target.job,
                status
            );
        }
        RunOutcome::Rejected { status, message } => {
            tracing::warn!(
                "Job {} rejected run request (status {}): {}",
                config.target.job,
                status,
                message
            );
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{job_api_stub, metadata_stub, stub_config};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_trigger_job_returns_outcome() {
        let metadata = metadata_stub(StatusCode::OK, r#"{"access_token":"abc123"}"#).await;
        let (endpoint, captured) = job_api_stub(StatusCode::OK).await;

        let outcome = trigger_job(&stub_config(metadata, endpoint)).await.unwrap();

        assert_eq!(outcome, RunOutcome::Accepted { status: 200 });
        assert_eq!(captured.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_trigger_job_surfaces_rejection() {
        let metadata = metadata_stub(StatusCode::OK, r#"{"access_token":"abc123"}"#).await;
        let (endpoint, _captured) = job_api_stub(StatusCode::NOT_FOUND).await;

        let outcome = trigger_job(&stub_config(metadata, endpoint)).await.unwrap();

        assert_eq!(outcome.status(), 404);
        assert!(!outcome.is_accepted());
    }

    #[tokio::test]
    async fn test_trigger_job_stops_on_malformed_token() {
        let metadata = metadata_stub(StatusCode::OK, r#"{"token":"abc123"}"#).await;
        let (endpoint, captured) = job_api_stub(StatusCode::OK).await;

        let err = trigger_job(&stub_config(metadata, endpoint))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MalformedToken(_)));
        assert!(captured.lock().unwrap().is_empty());
    }
}

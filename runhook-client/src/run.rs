//! Job-run trigger

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use runhook_core::domain::job::JobTarget;
use runhook_core::dto::run::RunRequest;
use runhook_core::dto::token::Token;

use crate::error::{ClientError, Result};

/// What the job-run API said about a trigger
///
/// The response body of an accepted run is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// 2xx from the job-run API
    Accepted { status: u16 },
    /// Any other status, with the body the API returned
    Rejected { status: u16, message: String },
}

impl RunOutcome {
    pub fn status(&self) -> u16 {
        match self {
            RunOutcome::Accepted { status } | RunOutcome::Rejected { status, .. } => *status,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, RunOutcome::Accepted { .. })
    }
}

/// Client for the `run` action of a single managed job
#[derive(Debug, Clone)]
pub struct RunClient {
    /// API endpoint without trailing slash (e.g., "https://us-east4-run.googleapis.com")
    endpoint: String,
    target: JobTarget,
    client: Client,
}

impl RunClient {
    /// Create a client against an explicit endpoint
    pub fn new(endpoint: impl Into<String>, target: JobTarget) -> Self {
        Self::with_client(endpoint, target, Client::new())
    }

    /// Create a client against the regional endpoint of `target`
    pub fn for_target(target: JobTarget) -> Self {
        let endpoint = target.default_endpoint();
        Self::new(endpoint, target)
    }

    pub fn with_client(endpoint: impl Into<String>, target: JobTarget, client: Client) -> Self {
        let endpoint = endpoint.into();
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            target,
            client,
        }
    }

    pub fn target(&self) -> &JobTarget {
        &self.target
    }

    pub fn run_url(&self) -> String {
        format!("{}{}", self.endpoint, self.target.run_path())
    }

    /// Trigger one run of the job with the given overrides
    ///
    /// Only transport failures are errors. A non-success status comes back
    /// as [`RunOutcome::Rejected`].
    pub async fn run_job(&self, token: &Token, request: &RunRequest) -> Result<RunOutcome> {
        let url = self.run_url();
        tracing::debug!("Triggering job run: {}", url);

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, token.bearer())
            .json(request)
            .send()
            .await
            .map_err(ClientError::JobApiUnreachable)?;

        let status = response.status();

        if status.is_success() {
            return Ok(RunOutcome::Accepted {
                status: status.as_u16(),
            });
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        Ok(RunOutcome::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

//! Job domain types

use serde::{Deserialize, Serialize};

/// Location of a managed job definition
///
/// Identifies which stored job a run request targets. The job definition
/// itself is never modified; only a single run is customized through
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTarget {
    pub region: String,
    pub project: String,
    pub job: String,
}

impl JobTarget {
    pub fn new(
        region: impl Into<String>,
        project: impl Into<String>,
        job: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            project: project.into(),
            job: job.into(),
        }
    }

    /// Regional API endpoint serving this job, without trailing slash
    pub fn default_endpoint(&self) -> String {
        format!("https://{}-run.googleapis.com", self.region)
    }

    /// Path of the `run` action for this job, relative to the endpoint
    pub fn run_path(&self) -> String {
        format!(
            "/apis/run.googleapis.com/v1/namespaces/{}/jobs/{}:run",
            self.project, self.job
        )
    }

    /// Full `run` URL against the regional endpoint
    pub fn run_url(&self) -> String {
        format!("{}{}", self.default_endpoint(), self.run_path())
    }
}

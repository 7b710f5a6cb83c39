//! API configuration
//!
//! Where the service listens, where it reads its access token from and
//! which managed job `/invoke` triggers.

use runhook_core::domain::job::JobTarget;
use runhook_core::domain::metadata::METADATA_TOKEN_URL;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_REGION: &str = "us-east4";
pub const DEFAULT_PROJECT_ID: &str = "YOUR_PROJECT_ID_HERE";
pub const DEFAULT_JOB_NAME: &str = "test-job";

/// API service configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// Token endpoint of the metadata server
    pub metadata_url: String,

    /// Job triggered by `/invoke`
    pub target: JobTarget,

    /// Job-run API base URL, regional endpoint of `target` unless overridden
    pub run_endpoint: String,
}

impl ApiConfig {
    /// Creates a configuration for a job target with default addresses
    pub fn new(target: JobTarget) -> Self {
        let run_endpoint = target.default_endpoint();
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            metadata_url: METADATA_TOKEN_URL.to_string(),
            target,
            run_endpoint,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Recognized environment variables (all optional):
    /// - RUNHOOK_BIND_ADDR (default: 0.0.0.0:8080)
    /// - RUNHOOK_METADATA_URL (default: metadata server token endpoint)
    /// - RUNHOOK_REGION (default: us-east4)
    /// - RUNHOOK_PROJECT_ID (default: YOUR_PROJECT_ID_HERE)
    /// - RUNHOOK_JOB_NAME (default: test-job)
    /// - RUNHOOK_RUN_ENDPOINT (default: https://{region}-run.googleapis.com)
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`ApiConfig::from_env`] with an arbitrary variable source
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let target = JobTarget::new(
            lookup("RUNHOOK_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            lookup("RUNHOOK_PROJECT_ID").unwrap_or_else(|| DEFAULT_PROJECT_ID.to_string()),
            lookup("RUNHOOK_JOB_NAME").unwrap_or_else(|| DEFAULT_JOB_NAME.to_string()),
        );

        let mut config = Self::new(target);

        if let Some(bind_addr) = lookup("RUNHOOK_BIND_ADDR") {
            config.bind_addr = bind_addr;
        }
        if let Some(metadata_url) = lookup("RUNHOOK_METADATA_URL") {
            config.metadata_url = metadata_url;
        }
        if let Some(run_endpoint) = lookup("RUNHOOK_RUN_ENDPOINT") {
            config.run_endpoint = run_endpoint;
        }

        config
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.bind_addr.is_empty() {
            anyhow::bail!("bind_addr cannot be empty");
        }

        if self.target.region.is_empty() {
            anyhow::bail!("region cannot be empty");
        }

        if self.target.project.is_empty() {
            anyhow::bail!("project id cannot be empty");
        }

        if self.target.job.is_empty() {
            anyhow::bail!("job name cannot be empty");
        }

        for (name, url) in [
            ("metadata_url", &self.metadata_url),
            ("run_endpoint", &self.run_endpoint),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
        }

        Ok(())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(JobTarget::new(
            DEFAULT_REGION,
            DEFAULT_PROJECT_ID,
            DEFAULT_JOB_NAME,
        ))
    }
}

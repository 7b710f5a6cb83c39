//! Runhook HTTP Client
//!
//! Outbound calls made by the runhook API service:
//! - [`MetadataClient`] reads the instance's access token from the metadata server
//! - [`RunClient`] triggers one run of a managed job with per-run overrides
//!
//! # Example
//!
//! ```no_run
//! use runhook_client::{MetadataClient, RunClient};
//! use runhook_core::domain::job::JobTarget;
//! use runhook_core::domain::metadata::METADATA_TOKEN_URL;
//! use runhook_core::dto::run::RunRequest;
//!
//! # async fn example() -> runhook_client::Result<()> {
//! let token = MetadataClient::new(METADATA_TOKEN_URL).resolve().await?;
//!
//! let target = JobTarget::new("us-east4", "my-project", "test-job");
//! let outcome = RunClient::for_target(target)
//!     .run_job(&token, &RunRequest::default_trigger())
//!     .await?;
//!
//! println!("job run status: {}", outcome.status());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod metadata;
mod run;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use metadata::MetadataClient;
pub use run::{RunClient, RunOutcome};

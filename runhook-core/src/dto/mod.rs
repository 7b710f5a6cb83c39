//! Data Transfer Objects for outbound calls
//!
//! Records read from the metadata server and sent to the job-run API.
//! All of them are built fresh per request and never persisted.

pub mod run;
pub mod token;

//! Core domain types
//!
//! Coordinates of the managed job being triggered and the fixed
//! addresses of the instance metadata server.

pub mod job;
pub mod metadata;

//! Service Module
//!
//! Business logic layer for the API.
//! Services build the outbound clients and compose the downstream calls.

pub mod trigger;

// Re-export for convenience
pub use trigger as trigger_service;

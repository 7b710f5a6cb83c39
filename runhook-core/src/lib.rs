//! Runhook Core
//!
//! Core types shared by the runhook API service and its HTTP client.
//!
//! This crate contains:
//! - Domain types: where a job lives and where credentials come from
//! - DTOs: wire records exchanged with the metadata server and the job-run API

pub mod domain;
pub mod dto;

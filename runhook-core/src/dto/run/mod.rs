//! Job-run DTOs
//!
//! Request body for the `run` action of a managed job. Keys are camelCase
//! on the wire.

use serde::{Deserialize, Serialize};

/// Envelope for a single job run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRequest {
    pub overrides: Overrides,
}

/// Per-run customization of the stored job definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overrides {
    pub container_overrides: Vec<ContainerOverride>,
    pub task_count: u32,
    pub timeout_seconds: u32,
}

/// Override for one container of the job's task template
///
/// An empty `name` targets the job's only container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerOverride {
    pub name: String,
    pub args: Vec<String>,
    pub env: Vec<EnvVar>,
    pub clear_args: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    pub value: String,
}

impl EnvVar {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl RunRequest {
    /// The trigger payload sent by `/invoke`
    pub fn default_trigger() -> Self {
        Self {
            overrides: Overrides::default_trigger(),
        }
    }
}

impl Overrides {
    /// One task, ten second timeout, two fixed args and two fixed env vars
    pub fn default_trigger() -> Self {
        Self {
            container_overrides: vec![ContainerOverride {
                name: String::new(),
                args: vec!["arg-1".to_string(), "arg-2".to_string()],
                env: vec![EnvVar::new("ENV_1", "HELLO"), EnvVar::new("ENV_2", "WORLD")],
                clear_args: false,
            }],
            task_count: 1,
            timeout_seconds: 10,
        }
    }
}

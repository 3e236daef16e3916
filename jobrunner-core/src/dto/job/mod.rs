//! Job DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::STATUS_RUNNING;

/// Request body that asks the server to start a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerJob {
    pub name: String,
    pub status: String,
}

impl TriggerJob {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: STATUS_RUNNING.to_string(),
        }
    }
}

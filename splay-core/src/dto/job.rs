//! Job DTOs for communication with the job server

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::job::{JobStatus, NodeOutcomes};

/// Request to start a new job over one batch of nodes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartJob {
    pub command: String,
    pub nodes: Vec<String>,
    pub quorum: u32,
    /// Maximum run time in seconds; `None` leaves the job unbounded server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_timeout: Option<u64>,
}

/// Job record as returned by job-start and job-status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobView {
    pub id: Uuid,
    pub command: String,
    pub status: JobStatus,
    #[serde(default)]
    pub nodes: NodeOutcomes,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

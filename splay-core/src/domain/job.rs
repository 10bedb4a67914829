//! Job domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Terminal record of one launched job request.
///
/// Built once polling observes a terminal status (or the poller resolves the
/// job locally as timed out); immutable thereafter. `nodes` always holds the
/// exact batch the job was requested for, in batch order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub nodes: Vec<String>,
    pub quorum: u32,
    pub status: JobStatus,
    pub outcomes: NodeOutcomes,
    pub launched_at: chrono::DateTime<chrono::Utc>,
}

/// Job execution status as reported by the job server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Queued,
    Running,
    Completed,
    Failed,
    TimedOut,
}

impl JobStatus {
    /// Whether no further status transition can occur
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::TimedOut)
    }
}

/// Per-node outcome partitions of a job
///
/// Each partition defaults to empty so partial server documents still parse.
/// A node appears in at most one partition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NodeOutcomes {
    #[serde(default)]
    pub succeeded: Vec<String>,
    #[serde(default)]
    pub failed: Vec<String>,
    #[serde(default)]
    pub unresponsive: Vec<String>,
}

impl NodeOutcomes {
    /// Whether the given node appears in any partition
    pub fn contains(&self, node: &str) -> bool {
        self.succeeded.iter().any(|n| n == node)
            || self.failed.iter().any(|n| n == node)
            || self.unresponsive.iter().any(|n| n == node)
    }
}

//! Dispatch configuration
//!
//! All options for one dispatch run, materialized once at the CLI boundary
//! into an immutable value that every component receives.

use std::time::Duration;

use splay_core::quorum::QuorumSpec;

/// Configuration for one dispatch run
///
/// Intervals and the batch size are configurable so the load the run puts on
/// the job server can be tuned per fleet.
#[derive(Debug, Clone)]
pub struct Config {
    /// Command to run on the target nodes
    pub command: String,

    /// Job server base URL (e.g., "http://localhost:8080")
    pub server_url: String,

    /// Minimum-success quorum, resolved per batch
    pub quorum: QuorumSpec,

    /// How long to wait between job-status calls
    pub poll_interval: Duration,

    /// Maximum time a launched job may run; `None` leaves it unbounded
    pub run_timeout: Option<Duration>,

    /// Pacing delay between consecutive batch launches
    pub batch_interval: Duration,

    /// Nodes per batch
    pub batch_size: usize,

    /// Re-dispatch failed nodes once after the first pass
    pub retry: bool,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.command.is_empty() {
            anyhow::bail!("command cannot be empty");
        }

        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            anyhow::bail!("server_url must start with http:// or https://");
        }

        if self.batch_size == 0 {
            anyhow::bail!("batch_size must be greater than 0");
        }

        if self.poll_interval.is_zero() {
            anyhow::bail!("poll_interval must be greater than 0");
        }

        Ok(())
    }
}

//! Dispatch engine
//!
//! Runs one command across a node fleet in rate-limited batches: partitions
//! the nodes, launches one job per batch in order, polls each job to a
//! terminal state, and optionally re-dispatches failed nodes once.
//!
//! Everything here is single-flight on purpose. Batches launch strictly in
//! input order and jobs are polled one at a time in launch order, so the
//! load the run puts on the job server stays predictable.

mod launcher;
mod poller;

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};
use uuid::Uuid;

use splay_core::domain::job::Job;
use splay_core::{aggregate, batch};

use crate::config::Config;
use crate::report::Reporter;
use crate::service::{Clock, JobService};

/// A job the server has accepted but that has not yet resolved
pub(crate) struct LaunchedJob {
    pub id: Uuid,
    pub nodes: Vec<String>,
    pub quorum: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Local launch instant, used for the run-timeout deadline
    pub launched: Instant,
}

/// Batch dispatch engine
pub struct Dispatcher {
    service: Arc<dyn JobService>,
    clock: Arc<dyn Clock>,
    reporter: Arc<dyn Reporter>,
    config: Config,
}

impl Dispatcher {
    /// Creates a new dispatcher
    pub fn new(
        service: Arc<dyn JobService>,
        clock: Arc<dyn Clock>,
        reporter: Arc<dyn Reporter>,
        config: Config,
    ) -> Self {
        Self {
            service,
            clock,
            reporter,
            config,
        }
    }

    /// Run the full dispatch over `nodes` and return the jobs to report on.
    ///
    /// When the retry option is set and the first pass leaves failed nodes
    /// behind, those nodes are re-batched and dispatched exactly once more,
    /// and the retry pass's jobs replace the first pass's in the returned
    /// list. An empty node list is a no-op that returns no jobs.
    pub async fn run(&self, nodes: &[String]) -> Result<Vec<Job>> {
        if nodes.is_empty() {
            warn!("Node resolution produced no nodes, nothing to dispatch");
            self.reporter.nothing_to_dispatch();
            return Ok(Vec::new());
        }

        info!(
            "Dispatching '{}' to {} node(s) in batches of {}",
            self.config.command,
            nodes.len(),
            self.config.batch_size
        );

        let jobs = self.dispatch_pass(nodes).await?;

        if self.config.retry {
            let seed = aggregate::retry_seed(&jobs);

            if !seed.is_empty() {
                info!("Retry pass over {} failed node(s)", seed.len());
                self.reporter.retry_started(&seed);
                return self.dispatch_pass(&seed).await;
            }
        }

        Ok(jobs)
    }

    /// One launch-all-batches-then-poll-all-jobs cycle
    async fn dispatch_pass(&self, nodes: &[String]) -> Result<Vec<Job>> {
        let batches = batch::partition(nodes, self.config.batch_size);
        let launched = self.launch_batches(&batches).await?;
        self.poll_jobs(launched).await
    }
}

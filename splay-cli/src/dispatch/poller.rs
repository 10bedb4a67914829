//! Job polling
//!
//! Waits each launched job out to a terminal state, one job at a time, in
//! launch order. Transport trouble during polling never aborts the run;
//! a job the server cannot account for resolves as timed out instead.

use anyhow::Result;
use tracing::{debug, warn};

use splay_core::domain::job::{Job, JobStatus, NodeOutcomes};

use super::{Dispatcher, LaunchedJob};

/// Consecutive status-poll failures tolerated before giving a job up
const MAX_POLL_FAILURES: u32 = 3;

impl Dispatcher {
    /// Poll every launched job to completion, in launch order.
    ///
    /// The poller does not start waiting on a job until its predecessor has
    /// resolved, and each job is handed to the reporter as it resolves.
    pub(crate) async fn poll_jobs(&self, launched: Vec<LaunchedJob>) -> Result<Vec<Job>> {
        let mut jobs = Vec::with_capacity(launched.len());

        for entry in launched {
            let job = self.poll_to_completion(entry).await;

            debug!("Job {} resolved as {:?}", job.id, job.status);
            self.reporter.job_finished(&job);
            jobs.push(job);
        }

        Ok(jobs)
    }

    /// Block until one job reaches a terminal state.
    ///
    /// Resolves the job as timed out locally when the configured run timeout
    /// elapses, when the server no longer knows the handle, or after
    /// [`MAX_POLL_FAILURES`] consecutive poll failures. A locally resolved
    /// job carries the last partitions observed.
    async fn poll_to_completion(&self, entry: LaunchedJob) -> Job {
        let mut failures = 0u32;
        let mut last_seen = NodeOutcomes::default();

        loop {
            match self.service.job_status(entry.id).await {
                Ok(view) => {
                    failures = 0;

                    if view.status.is_terminal() {
                        return finish(entry, view.status, view.nodes);
                    }

                    last_seen = view.nodes;
                }
                Err(e) if e.is_not_found() => {
                    warn!("Job {} is no longer known to the server: {}", entry.id, e);
                    return finish(entry, JobStatus::TimedOut, last_seen);
                }
                Err(e) => {
                    failures += 1;
                    warn!(
                        "Status poll for job {} failed ({}/{}): {}",
                        entry.id, failures, MAX_POLL_FAILURES, e
                    );

                    if failures >= MAX_POLL_FAILURES {
                        return finish(entry, JobStatus::TimedOut, last_seen);
                    }
                }
            }

            if let Some(timeout) = self.config.run_timeout {
                if self.clock.now().duration_since(entry.launched) >= timeout {
                    warn!("Job {} exceeded the run timeout of {:?}", entry.id, timeout);
                    return finish(entry, JobStatus::TimedOut, last_seen);
                }
            }

            self.clock.sleep(self.config.poll_interval).await;
        }
    }
}

/// Seal a launched job into its terminal record.
///
/// Requested nodes the server never filed in any partition are recorded as
/// unresponsive, so the partitions always cover the full batch.
fn finish(entry: LaunchedJob, status: JobStatus, mut outcomes: NodeOutcomes) -> Job {
    for node in &entry.nodes {
        if !outcomes.contains(node) {
            outcomes.unresponsive.push(node.clone());
        }
    }

    Job {
        id: entry.id,
        nodes: entry.nodes,
        quorum: entry.quorum,
        status,
        outcomes,
        launched_at: entry.created_at,
    }
}

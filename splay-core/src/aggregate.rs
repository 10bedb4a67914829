//! Run aggregation
//!
//! Ranks terminal job statuses by severity, selects the single worst job to
//! represent a dispatch pass, and extracts the failed-node union that seeds
//! a retry pass.

use std::collections::HashSet;

use crate::domain::job::{Job, JobStatus};

/// Severity rank of a status. Higher is worse; `Completed < Failed < TimedOut`.
fn severity(status: JobStatus) -> u8 {
    match status {
        JobStatus::Queued | JobStatus::Running | JobStatus::Completed => 0,
        JobStatus::Failed => 1,
        JobStatus::TimedOut => 2,
    }
}

/// The job with maximum severity among `jobs`.
///
/// Ties break toward the earliest launch: the scan only replaces its
/// candidate on a strictly higher severity. `None` when no jobs ran.
pub fn worst_job(jobs: &[Job]) -> Option<&Job> {
    jobs.iter()
        .reduce(|worst, job| {
            if severity(job.status) > severity(worst.status) {
                job
            } else {
                worst
            }
        })
}

/// The ordered, deduplicated node list a retry pass should target.
///
/// Takes every job's failed partition, plus the unresponsive partition of
/// jobs that timed out: a timed-out node never reported a result and is
/// exactly what an operator reruns. Unresponsive nodes of jobs that resolved
/// normally are left alone.
pub fn retry_seed(jobs: &[Job]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut seed = Vec::new();

    for job in jobs {
        for node in &job.outcomes.failed {
            if seen.insert(node.clone()) {
                seed.push(node.clone());
            }
        }

        if job.status == JobStatus::TimedOut {
            for node in &job.outcomes.unresponsive {
                if seen.insert(node.clone()) {
                    seed.push(node.clone());
                }
            }
        }
    }

    seed
}

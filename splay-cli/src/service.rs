//! Service seams
//!
//! Trait boundaries between the dispatch engine and the outside world: the
//! job server and the wall clock. Both are trait-based to enable testing and
//! dependency injection.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use uuid::Uuid;

use splay_client::{ClientError, JobServerClient};
use splay_core::dto::job::{JobView, StartJob};

/// Remote job server operations the dispatcher consumes
#[async_trait]
pub trait JobService: Send + Sync {
    /// Start a job over one batch of nodes
    async fn start_job(&self, req: &StartJob) -> Result<JobView, ClientError>;

    /// Fetch the current status of a launched job
    async fn job_status(&self, job_id: Uuid) -> Result<JobView, ClientError>;

    /// Search for candidate nodes
    async fn search_nodes(&self, query: &str) -> Result<Vec<String>, ClientError>;
}

#[async_trait]
impl JobService for JobServerClient {
    async fn start_job(&self, req: &StartJob) -> Result<JobView, ClientError> {
        JobServerClient::start_job(self, req).await
    }

    async fn job_status(&self, job_id: Uuid) -> Result<JobView, ClientError> {
        JobServerClient::job_status(self, job_id).await
    }

    async fn search_nodes(&self, query: &str) -> Result<Vec<String>, ClientError> {
        JobServerClient::search_nodes(self, query).await
    }
}

/// Time source for pacing and timeouts
///
/// Injected so pacing logic can be tested without real wall-clock delay.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current instant
    fn now(&self) -> Instant;

    /// Suspend for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the tokio timer
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

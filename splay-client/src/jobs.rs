//! Job-related API endpoints

use tracing::debug;
use uuid::Uuid;

use crate::JobServerClient;
use crate::error::Result;
use splay_core::dto::job::{JobView, StartJob};

impl JobServerClient {
    /// Start a new job over one batch of nodes
    ///
    /// # Arguments
    /// * `req` - The job start request (command, batch nodes, quorum)
    ///
    /// # Returns
    /// The created job record; its `id` is the handle used to poll.
    pub async fn start_job(&self, req: &StartJob) -> Result<JobView> {
        let url = format!("{}/api/jobs", self.base_url);

        debug!(
            "Starting job: command='{}', {} node(s), quorum {}",
            req.command,
            req.nodes.len(),
            req.quorum
        );

        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Get the current status of a job
    ///
    /// # Arguments
    /// * `job_id` - The job UUID returned by [`start_job`](Self::start_job)
    ///
    /// # Returns
    /// The current job record, including per-node outcome partitions.
    pub async fn job_status(&self, job_id: Uuid) -> Result<JobView> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }
}

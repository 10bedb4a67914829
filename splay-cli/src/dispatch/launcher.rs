//! Batch launching
//!
//! Submits one job request per batch, strictly in input order, waiting the
//! configured pacing interval between launches. The pacing is deliberate
//! rate limiting against the job server, not a correctness requirement.

use anyhow::{Context, Result};
use tracing::info;

use splay_core::dto::job::StartJob;

use super::{Dispatcher, LaunchedJob};

impl Dispatcher {
    /// Launch one job per batch, in batch order.
    ///
    /// A start failure aborts the pass: previously launched jobs of the
    /// aborted pass are not polled or reported.
    pub(crate) async fn launch_batches(
        &self,
        batches: &[Vec<String>],
    ) -> Result<Vec<LaunchedJob>> {
        let total = batches.len();
        let mut launched = Vec::with_capacity(total);

        for (idx, batch) in batches.iter().enumerate() {
            let quorum = self.config.quorum.threshold(batch.len());

            // Round fractional timeouts up so a sub-second bound is not
            // sent to the server as zero seconds
            let req = StartJob {
                command: self.config.command.clone(),
                nodes: batch.clone(),
                quorum,
                run_timeout: self
                    .config
                    .run_timeout
                    .map(|t| t.as_secs_f64().ceil() as u64),
            };

            let view = self
                .service
                .start_job(&req)
                .await
                .with_context(|| format!("Failed to start job for batch {}/{}", idx + 1, total))?;

            info!(
                "Started job {} for batch {}/{} ({} node(s), quorum {})",
                view.id,
                idx + 1,
                total,
                batch.len(),
                quorum
            );
            self.reporter.batch_started(idx + 1, total, batch, view.id);

            launched.push(LaunchedJob {
                id: view.id,
                nodes: batch.clone(),
                quorum,
                created_at: view.created_at,
                launched: self.clock.now(),
            });

            if idx + 1 < total {
                self.clock.sleep(self.config.batch_interval).await;
            }
        }

        Ok(launched)
    }
}

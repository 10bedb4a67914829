//! Operator reporting
//!
//! Renders run progress and completed jobs to the operator. This is
//! presentation, not logging: diagnostics go through `tracing`, operator
//! output goes through a [`Reporter`].

use colored::*;
use uuid::Uuid;

use splay_core::domain::job::{Job, JobStatus};

/// Sink for operator-facing run events
pub trait Reporter: Send + Sync {
    /// A batch's job was accepted by the server
    fn batch_started(&self, ordinal: usize, total: usize, nodes: &[String], job_id: Uuid);

    /// A retry pass is about to launch over the given nodes
    fn retry_started(&self, nodes: &[String]);

    /// A job reached a terminal state
    fn job_finished(&self, job: &Job);

    /// Resolution produced no nodes; nothing will be dispatched
    fn nothing_to_dispatch(&self);

    /// The run is over; `worst` is the job that decides its outcome
    fn run_summary(&self, worst: &Job);
}

/// Reporter that prints colorized output to stdout
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn batch_started(&self, ordinal: usize, total: usize, nodes: &[String], job_id: Uuid) {
        println!(
            "{} Batch {}/{} ({}): job {}",
            "▸".cyan(),
            ordinal,
            total,
            nodes.join(", "),
            job_id.to_string().dimmed()
        );
    }

    fn retry_started(&self, nodes: &[String]) {
        println!();
        println!(
            "{}",
            format!("Retrying {} failed node(s): {}", nodes.len(), nodes.join(", ")).yellow()
        );
    }

    fn job_finished(&self, job: &Job) {
        println!();
        println!("{} Job {}", "▸".cyan(), job.id.to_string().dimmed());
        println!("    Status:       {}", colorize_status(&job.status));
        println!("    Quorum:       {}", job.quorum);
        println!(
            "    Launched:     {}",
            job.launched_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );

        print_partition("Succeeded", &job.outcomes.succeeded);
        print_partition("Failed", &job.outcomes.failed);
        print_partition("Unresponsive", &job.outcomes.unresponsive);
    }

    fn nothing_to_dispatch(&self) {
        println!("{}", "No nodes to dispatch.".yellow());
    }

    fn run_summary(&self, worst: &Job) {
        println!();
        println!("{}", "Run result:".bold());
        println!("  Job:    {}", worst.id.to_string().cyan());
        println!("  Status: {}", colorize_status(&worst.status));
    }
}

fn print_partition(label: &str, nodes: &[String]) {
    if !nodes.is_empty() {
        println!("    {:<13} {}", format!("{}:", label), nodes.join(", "));
    }
}

/// Colorize a job status for terminal output
fn colorize_status(status: &JobStatus) -> ColoredString {
    match status {
        JobStatus::Queued => "Queued".dimmed(),
        JobStatus::Running => "Running".cyan(),
        JobStatus::Completed => "Completed".green(),
        JobStatus::Failed => "Failed".red(),
        JobStatus::TimedOut => "Timed out".red().bold(),
    }
}

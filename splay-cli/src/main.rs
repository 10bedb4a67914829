//! Splay CLI
//!
//! Dispatches a single command as remote jobs across a node fleet, in
//! rate-limited batches with a configurable success quorum, and reports the
//! worst outcome of the run. Optionally re-dispatches failed nodes once.

mod config;
mod dispatch;
mod report;
mod resolver;
mod service;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use splay_client::JobServerClient;
use splay_core::aggregate;
use splay_core::domain::job::JobStatus;
use splay_core::quorum::QuorumSpec;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::report::{ConsoleReporter, Reporter};
use crate::service::{JobService, SystemClock};

#[derive(Parser)]
#[command(name = "splay")]
#[command(about = "Dispatch a command across nodes in rate-limited batches", long_about = None)]
struct Cli {
    /// Command to run on the target nodes
    command: String,

    /// Explicit node names, in dispatch order
    nodes: Vec<String>,

    /// Job server URL
    #[arg(
        long,
        env = "SPLAY_SERVER_URL",
        default_value = "http://localhost:8080"
    )]
    server_url: String,

    /// Job quorum: percentage (-q 50%) or count (-q 145)
    #[arg(short, long, default_value = "100%")]
    quorum: String,

    /// Search query for candidate nodes
    #[arg(short, long)]
    search: Option<String>,

    /// Seconds between job status polls
    #[arg(long, default_value_t = 1.0)]
    poll_interval: f64,

    /// Maximum seconds a job may run; unset leaves jobs unbounded
    #[arg(long = "timeout")]
    run_timeout: Option<f64>,

    /// Seconds to wait between batch launches
    #[arg(long, default_value_t = 2.0)]
    interval: f64,

    /// Nodes per batch
    #[arg(short, long, default_value_t = 1)]
    batch_size: usize,

    /// Re-dispatch failed nodes once after the first pass
    #[arg(long)]
    retry: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "splay=info,splay_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // A malformed quorum fails here, before any network work
    let config = build_config(&cli)?;
    config.validate()?;

    let client = Arc::new(JobServerClient::new(&config.server_url));
    let service: Arc<dyn JobService> = client;

    let nodes = resolver::resolve_nodes(service.as_ref(), cli.search.as_deref(), &cli.nodes)
        .await
        .context("Failed to resolve target nodes")?;

    info!("Resolved {} target node(s)", nodes.len());

    let reporter = Arc::new(ConsoleReporter);
    let dispatcher = Dispatcher::new(service, Arc::new(SystemClock), reporter.clone(), config);

    let jobs = dispatcher.run(&nodes).await?;

    if let Some(worst) = aggregate::worst_job(&jobs) {
        reporter.run_summary(worst);

        if worst.status != JobStatus::Completed {
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Materialize the immutable run configuration from parsed arguments
fn build_config(cli: &Cli) -> Result<Config> {
    let quorum: QuorumSpec = cli
        .quorum
        .parse()
        .context("Failed to parse quorum option")?;

    // try_from_secs_f64 rejects negative, NaN, and overflowing values, so a
    // bad duration flag surfaces as a reported error rather than a panic
    let poll_interval = Duration::try_from_secs_f64(cli.poll_interval)
        .context("Failed to parse poll-interval option")?;
    let run_timeout = match cli.run_timeout {
        Some(secs) => {
            Some(Duration::try_from_secs_f64(secs).context("Failed to parse timeout option")?)
        }
        None => None,
    };
    let batch_interval =
        Duration::try_from_secs_f64(cli.interval).context("Failed to parse interval option")?;

    Ok(Config {
        command: cli.command.clone(),
        server_url: cli.server_url.clone(),
        quorum,
        poll_interval,
        run_timeout,
        batch_interval,
        batch_size: cli.batch_size,
        retry: cli.retry,
    })
}

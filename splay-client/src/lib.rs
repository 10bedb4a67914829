//! Splay HTTP Client
//!
//! A simple, type-safe HTTP client for the remote job server API.
//!
//! The job server exposes three operations the dispatcher needs: starting a
//! job over a batch of nodes, fetching a job's current status, and searching
//! for candidate nodes.
//!
//! # Example
//!
//! ```no_run
//! use splay_client::JobServerClient;
//! use splay_core::dto::job::StartJob;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), splay_client::ClientError> {
//!     let client = JobServerClient::new("http://localhost:8080");
//!
//!     let job = client.start_job(&StartJob {
//!         command: "echo hi".to_string(),
//!         nodes: vec!["n1".to_string()],
//!         quorum: 1,
//!         run_timeout: None,
//!     }).await?;
//!
//!     println!("Started job: {}", job.id);
//!     Ok(())
//! }
//! ```

pub mod error;
mod jobs;
mod nodes;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the job server API
///
/// Provides typed methods for the endpoints the dispatcher consumes:
/// - Job lifecycle (start, status)
/// - Node search
#[derive(Debug, Clone)]
pub struct JobServerClient {
    /// Base URL of the job server (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JobServerClient {
    /// Create a new job server client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the job server API (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new job server client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the job server
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the request
    /// failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

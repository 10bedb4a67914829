//! Node resolution
//!
//! Turns the search query and explicit node arguments into the ordered node
//! list a run operates on. Search results come first in server order,
//! explicit names follow in argument order, and duplicates keep their first
//! occurrence.

use std::collections::HashSet;

use anyhow::{Context, Result};

use crate::service::JobService;

/// Resolve the ordered node list for a run
///
/// # Arguments
/// * `service` - The job service used for node search
/// * `search` - Optional search query for candidate nodes
/// * `explicit` - Node names given directly on the command line
///
/// # Errors
/// Returns an error if the search call fails.
pub async fn resolve_nodes(
    service: &dyn JobService,
    search: Option<&str>,
    explicit: &[String],
) -> Result<Vec<String>> {
    let mut names = Vec::new();

    if let Some(query) = search {
        names = service
            .search_nodes(query)
            .await
            .with_context(|| format!("Node search '{}' failed", query))?;
    }

    names.extend(explicit.iter().cloned());

    let mut seen = HashSet::new();
    names.retain(|name| seen.insert(name.clone()));

    Ok(names)
}

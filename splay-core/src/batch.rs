//! Node batching
//!
//! Partitions an ordered node list into fixed-size batches that together
//! reproduce the input exactly: full batches of `batch_size` nodes, with the
//! final batch holding the remainder.

/// Split `nodes` into ordered batches of at most `batch_size` nodes.
///
/// Order within and across batches follows the input. An empty input yields
/// no batches.
///
/// # Panics
/// Panics if `batch_size` is 0; callers validate it at the configuration
/// boundary.
pub fn partition(nodes: &[String], batch_size: usize) -> Vec<Vec<String>> {
    nodes.chunks(batch_size).map(|chunk| chunk.to_vec()).collect()
}

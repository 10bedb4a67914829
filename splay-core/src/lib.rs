//! Splay Core
//!
//! Core types and dispatch arithmetic for the splay batch-job dispatcher.
//!
//! This crate contains:
//! - Domain types: the job record and its per-node outcome partitions
//! - DTOs: wire representations exchanged with the job server
//! - Pure dispatch logic: batching, quorum thresholds, and run aggregation

pub mod aggregate;
pub mod batch;
pub mod domain;
pub mod dto;
pub mod quorum;

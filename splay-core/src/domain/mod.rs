//! Core domain types
//!
//! These types represent a dispatched job as the CLI sees it once the remote
//! server has resolved it, with typed fields replacing the server's loose
//! JSON documents.

pub mod job;

//! Data Transfer Objects for the job server API
//!
//! Wire representations of requests to and records from the remote job
//! server, kept separate from the domain types the dispatcher reasons about.

pub mod job;

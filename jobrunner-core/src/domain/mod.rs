//! Core domain types
//!
//! Value objects describing where a job lives (server, credentials) and what
//! the server reports about it. All of them are created per call and never
//! mutated afterwards.

pub mod job;
pub mod server;
pub mod user;

//! Job Runner Core
//!
//! Core types shared by the job runner client and CLI.
//!
//! This crate contains:
//! - Domain types: server address, credentials, and the server's view of a job
//! - DTOs: request bodies sent to the SMC job resource

pub mod domain;
pub mod dto;

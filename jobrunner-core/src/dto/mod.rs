//! Data Transfer Objects sent to the SMC REST API

pub mod job;

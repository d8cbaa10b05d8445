//! Core errors, configuration, tracing, and constants shared by the netdyn
//! network-statistics and Kuramoto-simulation pipelines.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

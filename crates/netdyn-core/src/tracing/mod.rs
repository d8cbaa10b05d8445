//! Logging for netdyn: `tracing` events filtered per module through
//! `EnvFilter`, configured from `NETDYN_LOG`.

pub mod setup;

pub use setup::{init_tracing, log_filter};

//! Observability for the warehouse.
//! `tracing` crate with `EnvFilter`, per-module log levels, and span names.

pub mod setup;
pub mod spans;

pub use setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
pub use spans::names;

//! Observability setup for taskbridge.

pub mod tracing_setup;

//! Service layer orchestrating command execution.

pub mod bridge;

pub use bridge::BridgeService;

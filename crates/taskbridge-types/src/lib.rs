//! Shared domain types for taskbridge.
//!
//! This crate contains the types used across the bridge: tracker issues,
//! chat interaction payloads, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod issue;

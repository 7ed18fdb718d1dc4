//! Infrastructure layer for taskbridge.
//!
//! Contains implementations of the ports defined in `taskbridge-core`:
//! the issue-tracker HTTP client, the chat platform REST client, webhook
//! signature verification, and the configuration loader.

pub mod chat;
pub mod config;
pub mod github;
pub mod secret;

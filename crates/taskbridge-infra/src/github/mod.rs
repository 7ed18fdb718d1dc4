//! GitHub-compatible issue tracker client.

pub mod client;
pub mod types;

pub use client::GithubClient;

//! Bridge configuration types.
//!
//! `BridgeConfig` represents the top-level `config.toml`. All fields have
//! defaults so a missing or partial file still yields a runnable config.
//! Secrets (API tokens, the webhook signing secret) never live here -- they
//! come from the environment.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Issue tracker settings.
    #[serde(default)]
    pub tracker: TrackerConfig,

    /// Chat platform settings.
    #[serde(default)]
    pub chat: ChatConfig,

    /// HTTP server settings for the interactions endpoint.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            tracker: TrackerConfig::default(),
            chat: ChatConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

/// Issue-tracker connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Repository owner (organization or user).
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Repository name holding the team's tasks.
    #[serde(default = "default_repo")]
    pub repo: String,
    /// Tracker API base URL.
    #[serde(default = "default_tracker_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_owner() -> String {
    "example-org".to_string()
}

fn default_repo() -> String {
    "todo".to_string()
}

fn default_tracker_api_base() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            repo: default_repo(),
            api_base: default_tracker_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Chat platform connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Chat platform REST API base URL.
    #[serde(default = "default_chat_api_base")]
    pub api_base: String,
    /// Application id under which slash commands are registered.
    #[serde(default)]
    pub application_id: String,
    /// Guild the commands are scoped to.
    #[serde(default)]
    pub guild_id: String,
    /// Per-message character ceiling enforced by the platform.
    #[serde(default = "default_message_char_limit")]
    pub message_char_limit: usize,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_chat_api_base() -> String {
    "https://chat.example.com/api/v10".to_string()
}

fn default_message_char_limit() -> usize {
    2000
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_base: default_chat_api_base(),
            application_id: String::new(),
            guild_id: String::new(),
            message_char_limit: default_message_char_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Interactions endpoint bind settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8130
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

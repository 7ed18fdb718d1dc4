//! Application state wiring the services together.
//!
//! The bridge service is generic over the tracker and identity-store ports;
//! AppState pins it to the concrete infra implementations.

use std::sync::Arc;

use secrecy::SecretString;

use taskbridge_core::identity::InMemoryIdentityStore;
use taskbridge_core::service::BridgeService;
use taskbridge_infra::chat::ChatClient;
use taskbridge_infra::github::GithubClient;
use taskbridge_infra::secret::require_env;
use taskbridge_types::config::BridgeConfig;

/// Bridge service pinned to the concrete infra implementations.
pub type ConcreteBridgeService = BridgeService<GithubClient, InMemoryIdentityStore>;

/// Required environment variables.
pub const GITHUB_TOKEN_VAR: &str = "TASKBRIDGE_GITHUB_TOKEN";
pub const CHAT_TOKEN_VAR: &str = "TASKBRIDGE_CHAT_TOKEN";
pub const SIGNING_SECRET_VAR: &str = "TASKBRIDGE_SIGNING_SECRET";

/// Shared application state for the interactions endpoint.
#[derive(Clone)]
pub struct AppState {
    pub bridge: Arc<ConcreteBridgeService>,
    pub chat: Arc<ChatClient>,
    pub signing_secret: SecretString,
}

impl AppState {
    /// Initialize the application state from config and environment secrets.
    pub fn init(config: &BridgeConfig) -> anyhow::Result<Self> {
        let github_token = require_env(GITHUB_TOKEN_VAR)?;
        let chat_token = require_env(CHAT_TOKEN_VAR)?;
        let signing_secret = require_env(SIGNING_SECRET_VAR)?;

        let tracker = GithubClient::new(&config.tracker, github_token);
        let identities = InMemoryIdentityStore::new();
        let bridge = BridgeService::new(tracker, identities, config.chat.message_char_limit);
        let chat = ChatClient::new(&config.chat, chat_token);

        Ok(Self {
            bridge: Arc::new(bridge),
            chat: Arc::new(chat),
            signing_secret,
        })
    }
}

//! ChatClient -- REST client for the chat platform.
//!
//! Handles slash command registration (bulk overwrite at startup), command
//! deletion (shutdown), and interaction responses. Implements the
//! [`ResponseChannel`] port so the interactions handler never touches
//! reqwest directly.
//!
//! The bot token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use taskbridge_core::chat::ResponseChannel;
use taskbridge_types::chat::{RegisteredCommand, SlashCommandSpec};
use taskbridge_types::config::ChatConfig;
use taskbridge_types::error::ChatError;

/// Interaction callback type for a message response.
const CALLBACK_CHANNEL_MESSAGE: u8 = 4;

/// Message flag marking a reply visible only to the invoker.
const FLAG_EPHEMERAL: u64 = 64;

/// REST client scoped to one application and guild.
pub struct ChatClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
    application_id: String,
    guild_id: String,
}

/// Wire shape of a registered command acknowledgement.
#[derive(Debug, Deserialize)]
struct CommandAck {
    id: String,
    name: String,
}

impl ChatClient {
    /// Create a client from the chat configuration.
    pub fn new(config: &ChatConfig, token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("taskbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            application_id: config.application_id.clone(),
            guild_id: config.guild_id.clone(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn commands_url(&self) -> String {
        format!(
            "{}/applications/{}/guilds/{}/commands",
            self.base_url, self.application_id, self.guild_id
        )
    }

    fn command_url(&self, command_id: &str) -> String {
        format!("{}/{}", self.commands_url(), command_id)
    }

    fn callback_url(&self, interaction_id: &str, token: &str) -> String {
        format!(
            "{}/interactions/{}/{}/callback",
            self.base_url, interaction_id, token
        )
    }

    /// Map a non-success status to a [`ChatError`].
    fn error_for_status(status: u16, body: String) -> ChatError {
        match status {
            401 => ChatError::AuthenticationFailed,
            429 => ChatError::RateLimited,
            _ => ChatError::Api {
                status,
                message: body,
            },
        }
    }

    /// Replace the guild's command set with the given specs.
    ///
    /// Returns the platform's acknowledgement for each command; keep these
    /// for deregistration at shutdown.
    pub async fn register_commands(
        &self,
        specs: &[SlashCommandSpec],
    ) -> Result<Vec<RegisteredCommand>, ChatError> {
        let url = self.commands_url();
        tracing::info!(count = specs.len(), "registering slash commands");

        let response = self
            .client
            .put(&url)
            .bearer_auth(self.token.expose_secret())
            .json(specs)
            .send()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), body));
        }

        let acks: Vec<CommandAck> = response
            .json()
            .await
            .map_err(|e| ChatError::Deserialization(e.to_string()))?;

        Ok(acks
            .into_iter()
            .map(|ack| RegisteredCommand {
                id: ack.id,
                name: ack.name,
            })
            .collect())
    }

    /// Delete one registered command.
    pub async fn delete_command(&self, command: &RegisteredCommand) -> Result<(), ChatError> {
        let url = self.command_url(&command.id);

        let response = self
            .client
            .delete(&url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), body));
        }

        tracing::debug!(name = %command.name, "deleted slash command");
        Ok(())
    }

    /// Build the JSON body for an interaction response.
    fn response_body(content: &str, ephemeral: bool) -> serde_json::Value {
        let mut data = json!({ "content": content });
        if ephemeral {
            data["flags"] = json!(FLAG_EPHEMERAL);
        }
        json!({
            "type": CALLBACK_CHANNEL_MESSAGE,
            "data": data,
        })
    }
}

// ChatClient intentionally does NOT derive Debug so the token can never leak
// through formatting.

impl ResponseChannel for ChatClient {
    async fn respond(
        &self,
        interaction_id: &str,
        interaction_token: &str,
        content: &str,
        ephemeral: bool,
    ) -> Result<(), ChatError> {
        let url = self.callback_url(interaction_id, interaction_token);
        let body = Self::response_body(content, ephemeral);

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), body));
        }

        Ok(())
    }
}

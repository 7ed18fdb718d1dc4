//! Chat-platform interaction types.
//!
//! Defines the payloads exchanged with the chat platform: inbound slash
//! command invocations, outbound replies, and the command registration
//! shapes used at startup and shutdown.

use serde::{Deserialize, Serialize};

/// Opaque chat-platform user identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatUserId(pub String);

impl ChatUserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ChatUserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A slash command invocation as delivered by the chat platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandInvocation {
    /// Interaction id, used to address the response callback.
    pub interaction_id: String,
    /// One-time token authorizing responses to this interaction.
    pub interaction_token: String,
    /// Name of the invoked command (without the leading slash).
    pub command: String,
    /// String options in declaration order.
    #[serde(default)]
    pub options: Vec<CommandOption>,
    /// The invoking guild member's user id. `None` when the command was
    /// invoked outside a guild (e.g. a direct message).
    pub user_id: Option<ChatUserId>,
}

/// A single string option passed to a command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    pub name: String,
    pub value: String,
}

/// An ordered reply to a command invocation.
///
/// Each message is delivered as a discrete chat message, in order. The
/// ephemeral flag applies to all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub messages: Vec<String>,
    pub ephemeral: bool,
}

impl CommandReply {
    /// A single ephemeral message.
    pub fn ephemeral(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
            ephemeral: true,
        }
    }

    /// An ordered sequence of ephemeral messages.
    pub fn ephemeral_sequence(messages: Vec<String>) -> Self {
        Self {
            messages,
            ephemeral: true,
        }
    }
}

/// Declaration of a slash command for registration with the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlashCommandSpec {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SlashCommandOption>,
}

/// A declared option on a slash command. Only string options are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlashCommandOption {
    pub name: String,
    pub description: String,
    pub required: bool,
}

/// A command the platform acknowledged as registered.
///
/// Kept for the lifetime of the process so the shutdown path can delete
/// each one by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredCommand {
    /// Platform-assigned command id.
    pub id: String,
    /// Command name, for logging.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_user_id_transparent_serde() {
        let id = ChatUserId::new("1234567890");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1234567890\"");
        let parsed: ChatUserId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_invocation_deserialize_defaults() {
        let json = r#"{
            "interaction_id": "i-1",
            "interaction_token": "tok",
            "command": "all"
        }"#;
        let inv: CommandInvocation = serde_json::from_str(json).unwrap();
        assert_eq!(inv.command, "all");
        assert!(inv.options.is_empty());
        assert!(inv.user_id.is_none());
    }

    #[test]
    fn test_spec_serializes_without_empty_options() {
        let spec = SlashCommandSpec {
            name: "all".to_string(),
            description: "List all open tasks".to_string(),
            options: Vec::new(),
        };
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("options").is_none());
    }

    #[test]
    fn test_reply_ephemeral_helpers() {
        let reply = CommandReply::ephemeral("hi");
        assert_eq!(reply.messages, vec!["hi".to_string()]);
        assert!(reply.ephemeral);

        let seq = CommandReply::ephemeral_sequence(vec!["a".into(), "b".into()]);
        assert_eq!(seq.messages.len(), 2);
        assert!(seq.ephemeral);
    }
}

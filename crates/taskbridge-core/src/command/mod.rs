//! Slash command definitions, parsing, and registration specs.
//!
//! Commands form a closed enum so dispatch stays exhaustive at compile time.
//! `command_specs()` produces the declarations pushed to the chat platform
//! at startup; `Command::parse` maps an inbound invocation back onto the
//! enum.

use taskbridge_types::chat::{CommandInvocation, SlashCommandOption, SlashCommandSpec};
use taskbridge_types::error::CommandError;

/// Option name carrying the tracker username for `/identify`.
const IDENTIFY_USERNAME_OPTION: &str = "tracker-username";

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show usage text.
    Help,
    /// Link the invoking chat user to a tracker login.
    Identify { username: String },
    /// List all open issues.
    All,
    /// List open issues assigned to the invoking user's linked login.
    Mine,
}

impl Command {
    /// Parse an inbound invocation into a [`Command`].
    pub fn parse(invocation: &CommandInvocation) -> Result<Self, CommandError> {
        match invocation.command.as_str() {
            "help" => Ok(Command::Help),
            "all" => Ok(Command::All),
            "mine" => Ok(Command::Mine),
            "identify" => {
                let username = invocation
                    .options
                    .iter()
                    .find(|o| o.name == IDENTIFY_USERNAME_OPTION)
                    .map(|o| o.value.trim())
                    .filter(|v| !v.is_empty())
                    .ok_or_else(|| {
                        CommandError::MissingOption(IDENTIFY_USERNAME_OPTION.to_string())
                    })?;
                Ok(Command::Identify {
                    username: username.to_string(),
                })
            }
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }

    /// The wire name of this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Identify { .. } => "identify",
            Command::All => "all",
            Command::Mine => "mine",
        }
    }
}

/// Declarations for every command, registered with the platform at startup.
pub fn command_specs() -> Vec<SlashCommandSpec> {
    vec![
        SlashCommandSpec {
            name: "help".to_string(),
            description: "How to use this bot.".to_string(),
            options: Vec::new(),
        },
        SlashCommandSpec {
            name: "identify".to_string(),
            description: "Link your tracker username with your chat account".to_string(),
            options: vec![SlashCommandOption {
                name: IDENTIFY_USERNAME_OPTION.to_string(),
                description: "Your issue-tracker username".to_string(),
                required: true,
            }],
        },
        SlashCommandSpec {
            name: "all".to_string(),
            description: "List all open tasks".to_string(),
            options: Vec::new(),
        },
        SlashCommandSpec {
            name: "mine".to_string(),
            description: "List all open tasks assigned to you".to_string(),
            options: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskbridge_types::chat::{ChatUserId, CommandOption};

    fn invocation(command: &str, options: Vec<CommandOption>) -> CommandInvocation {
        CommandInvocation {
            interaction_id: "i-1".to_string(),
            interaction_token: "tok".to_string(),
            command: command.to_string(),
            options,
            user_id: Some(ChatUserId::new("u-1")),
        }
    }

    #[test]
    fn parses_bare_commands() {
        assert_eq!(Command::parse(&invocation("help", vec![])), Ok(Command::Help));
        assert_eq!(Command::parse(&invocation("all", vec![])), Ok(Command::All));
        assert_eq!(Command::parse(&invocation("mine", vec![])), Ok(Command::Mine));
    }

    #[test]
    fn parses_identify_with_username() {
        let inv = invocation(
            "identify",
            vec![CommandOption {
                name: "tracker-username".to_string(),
                value: "octocat".to_string(),
            }],
        );
        assert_eq!(
            Command::parse(&inv),
            Ok(Command::Identify {
                username: "octocat".to_string()
            })
        );
    }

    #[test]
    fn identify_trims_whitespace() {
        let inv = invocation(
            "identify",
            vec![CommandOption {
                name: "tracker-username".to_string(),
                value: "  octocat  ".to_string(),
            }],
        );
        assert_eq!(
            Command::parse(&inv),
            Ok(Command::Identify {
                username: "octocat".to_string()
            })
        );
    }

    #[test]
    fn identify_without_option_fails() {
        let err = Command::parse(&invocation("identify", vec![])).unwrap_err();
        assert_eq!(
            err,
            CommandError::MissingOption("tracker-username".to_string())
        );
    }

    #[test]
    fn identify_with_empty_username_fails() {
        let inv = invocation(
            "identify",
            vec![CommandOption {
                name: "tracker-username".to_string(),
                value: "   ".to_string(),
            }],
        );
        assert!(Command::parse(&inv).is_err());
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = Command::parse(&invocation("subscribe-all", vec![])).unwrap_err();
        assert_eq!(
            err,
            CommandError::UnknownCommand("subscribe-all".to_string())
        );
    }

    #[test]
    fn specs_cover_every_command() {
        let specs = command_specs();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["help", "identify", "all", "mine"]);

        let identify = &specs[1];
        assert_eq!(identify.options.len(), 1);
        assert!(identify.options[0].required);
    }
}

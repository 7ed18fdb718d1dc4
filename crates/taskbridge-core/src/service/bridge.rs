//! Command execution service.
//!
//! `BridgeService` wires the ports together: it parses an invocation,
//! consults the identity store, fetches issues through the tracker port,
//! renders them, and chunks the rendered text into platform-sized messages.
//!
//! Every outcome is a `CommandReply` -- tracker failures are logged for the
//! operator and surfaced to the user as a fixed message, never as a raw
//! error.

use taskbridge_types::chat::{ChatUserId, CommandInvocation, CommandReply};
use taskbridge_types::error::CommandError;
use taskbridge_types::issue::{Issue, IssueState};

use crate::command::Command;
use crate::identity::IdentityStore;
use crate::render::chunker::chunk_text;
use crate::render::issue::render_issues;
use crate::tracker::IssueTracker;

/// Reply for commands that must be invoked from a guild.
pub const NOT_IN_GUILD: &str = "You must be in a server to use this command.";

/// Reply when `/identify` options are missing or malformed.
pub const INVALID_IDENTIFY_OPTIONS: &str =
    "Invalid options provided. Please provide a single tracker username.";

/// Reply when the tracker cannot be reached.
pub const FETCH_FAILED: &str =
    "Encountered an error while fetching issues. Please contact an administrator.";

/// Reply for `/mine` before the user has linked a login.
pub const NOT_IDENTIFIED: &str =
    "You haven't linked a tracker username yet. Use `/identify` to link your account.";

/// Reply for unrecognized commands.
pub const UNKNOWN_COMMAND: &str = "Unknown command.";

/// Usage text for `/help`.
pub const HELP_TEXT: &str = "This bot lets you read the team task list from chat.\n\n\
    Use the `/identify` command to link your tracker username with your chat \
    account, then use `/all` and `/mine` to see all open tasks and open tasks \
    assigned to you, respectively.";

/// Executes slash commands against the tracker and identity ports.
pub struct BridgeService<T, S> {
    tracker: T,
    identities: S,
    message_char_limit: usize,
}

impl<T, S> BridgeService<T, S>
where
    T: IssueTracker,
    S: IdentityStore,
{
    pub fn new(tracker: T, identities: S, message_char_limit: usize) -> Self {
        Self {
            tracker,
            identities,
            message_char_limit,
        }
    }

    /// Execute an invocation and produce the ordered reply messages.
    pub async fn execute(&self, invocation: &CommandInvocation) -> CommandReply {
        let command = match Command::parse(invocation) {
            Ok(command) => command,
            Err(CommandError::MissingOption(option)) => {
                tracing::debug!(command = %invocation.command, %option, "invalid options");
                return CommandReply::ephemeral(INVALID_IDENTIFY_OPTIONS);
            }
            Err(err) => {
                tracing::warn!(command = %invocation.command, error = %err, "unknown command");
                return CommandReply::ephemeral(UNKNOWN_COMMAND);
            }
        };

        tracing::debug!(command = command.name(), "dispatching command");

        match command {
            Command::Help => CommandReply::ephemeral(HELP_TEXT),
            Command::Identify { username } => {
                self.identify(invocation.user_id.as_ref(), username).await
            }
            Command::All => self.list_all().await,
            Command::Mine => self.list_mine(invocation.user_id.as_ref()).await,
        }
    }

    async fn identify(&self, user: Option<&ChatUserId>, username: String) -> CommandReply {
        let Some(user) = user else {
            return CommandReply::ephemeral(NOT_IN_GUILD);
        };

        tracing::info!(user = %user, login = %username, "linking identity");
        self.identities.set(user.clone(), username.clone()).await;

        CommandReply::ephemeral(format!(
            "Your chat account has been linked to `{username}` on the issue tracker."
        ))
    }

    async fn list_all(&self) -> CommandReply {
        match self.tracker.list_issues(IssueState::Open).await {
            Ok(issues) => self.issues_reply(&issues),
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch open issues");
                CommandReply::ephemeral(FETCH_FAILED)
            }
        }
    }

    async fn list_mine(&self, user: Option<&ChatUserId>) -> CommandReply {
        let Some(user) = user else {
            return CommandReply::ephemeral(NOT_IN_GUILD);
        };

        let Some(login) = self.identities.get(user).await else {
            return CommandReply::ephemeral(NOT_IDENTIFIED);
        };

        match self.tracker.list_issues(IssueState::Open).await {
            Ok(issues) => {
                let mine: Vec<Issue> = issues
                    .into_iter()
                    .filter(|issue| issue.is_assigned_to(&login))
                    .collect();
                self.issues_reply(&mine)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch open issues");
                CommandReply::ephemeral(FETCH_FAILED)
            }
        }
    }

    fn issues_reply(&self, issues: &[Issue]) -> CommandReply {
        let text = render_issues(issues);
        CommandReply::ephemeral_sequence(chunk_text(&text, self.message_char_limit))
    }
}

use thiserror::Error;

/// Errors raised while rendering issues.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The issue record is missing a required display field. Carries the
    /// issue number, or "unknown" when even that is unavailable.
    #[error("issue {number} has missing fields")]
    MalformedIssue { number: String },
}

/// Errors from the issue-tracker client.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker authentication failed")]
    AuthenticationFailed,

    #[error("tracker rate limit exceeded")]
    RateLimited,

    #[error("tracker API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("tracker HTTP request failed: {0}")]
    Http(String),

    #[error("failed to parse tracker response: {0}")]
    Deserialization(String),
}

/// Errors from the chat platform client.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat authentication failed")]
    AuthenticationFailed,

    #[error("chat rate limit exceeded")]
    RateLimited,

    #[error("chat API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("chat HTTP request failed: {0}")]
    Http(String),

    #[error("failed to parse chat response: {0}")]
    Deserialization(String),
}

/// Errors from parsing a command invocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: '{0}'")]
    UnknownCommand(String),

    #[error("missing or empty option: '{0}'")]
    MissingOption(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let err = RenderError::MalformedIssue {
            number: "17".to_string(),
        };
        assert_eq!(err.to_string(), "issue 17 has missing fields");
    }

    #[test]
    fn test_tracker_error_display() {
        let err = TrackerError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert!(err.to_string().contains("502"));
        assert!(err.to_string().contains("bad gateway"));
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::UnknownCommand("frobnicate".to_string());
        assert_eq!(err.to_string(), "unknown command: 'frobnicate'");
    }
}

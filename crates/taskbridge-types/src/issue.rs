//! Issue-tracker domain types.
//!
//! `Issue` mirrors the tracker's wire shape: every display field is optional
//! because the tracker API omits fields freely. Validation happens at render
//! time, where a record missing a required field is rejected as malformed
//! rather than silently rendered with holes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked unit of work in the issue tracker.
///
/// Fields other than `number` are optional by design: the renderer decides
/// whether a record is complete enough to display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Issue number within its repository.
    pub number: u64,
    /// Issue title.
    pub title: Option<String>,
    /// Browser-facing URL for the issue.
    pub html_url: Option<String>,
    /// Number of comments on the issue.
    pub comments: Option<u32>,
    /// When the issue was created.
    pub created_at: Option<DateTime<Utc>>,
    /// When the issue was last updated.
    pub updated_at: Option<DateTime<Utc>>,
    /// Users assigned to the issue, in tracker order.
    #[serde(default)]
    pub assignees: Vec<Assignee>,
}

/// A user assigned to an issue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignee {
    /// Tracker login name. Optional on the wire; assignees without a login
    /// are skipped when rendering.
    pub login: Option<String>,
}

impl Issue {
    /// True when some assignee carries the given login.
    pub fn is_assigned_to(&self, login: &str) -> bool {
        self.assignees
            .iter()
            .any(|a| a.login.as_deref() == Some(login))
    }
}

/// State filter for listing issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    All,
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IssueState::Open => "open",
            IssueState::Closed => "closed",
            IssueState::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for IssueState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IssueState::Open),
            "closed" => Ok(IssueState::Closed),
            "all" => Ok(IssueState::All),
            other => Err(format!("invalid issue state: '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignee(login: &str) -> Assignee {
        Assignee {
            login: Some(login.to_string()),
        }
    }

    #[test]
    fn test_is_assigned_to() {
        let issue = Issue {
            number: 7,
            title: Some("Fix the build".to_string()),
            html_url: Some("https://tracker.test/7".to_string()),
            comments: Some(0),
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
            assignees: vec![assignee("alice"), assignee("bob")],
        };

        assert!(issue.is_assigned_to("alice"));
        assert!(issue.is_assigned_to("bob"));
        assert!(!issue.is_assigned_to("carol"));
    }

    #[test]
    fn test_is_assigned_to_ignores_missing_login() {
        let issue = Issue {
            number: 8,
            title: None,
            html_url: None,
            comments: None,
            created_at: None,
            updated_at: None,
            assignees: vec![Assignee { login: None }],
        };

        assert!(!issue.is_assigned_to("alice"));
    }

    #[test]
    fn test_issue_state_display_roundtrip() {
        for state in [IssueState::Open, IssueState::Closed, IssueState::All] {
            let parsed: IssueState = state.to_string().parse().unwrap();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn test_issue_state_from_str_invalid() {
        assert!("reopened".parse::<IssueState>().is_err());
        assert!("".parse::<IssueState>().is_err());
    }

    #[test]
    fn test_issue_deserialize_missing_fields() {
        let json = r#"{"number": 42}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 42);
        assert!(issue.title.is_none());
        assert!(issue.assignees.is_empty());
    }
}

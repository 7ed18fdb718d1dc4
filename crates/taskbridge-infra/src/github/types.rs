//! Wire types for the tracker's issues endpoint.
//!
//! Every display field is optional on the wire; conversion into the domain
//! [`Issue`] preserves that, leaving completeness checks to the renderer.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use taskbridge_types::issue::{Assignee, Issue};

/// One issue as returned by `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubIssue {
    pub number: u64,
    pub title: Option<String>,
    pub html_url: Option<String>,
    pub comments: Option<u32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub assignees: Vec<GithubUser>,
}

/// A user reference embedded in an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubUser {
    pub login: Option<String>,
}

impl From<GithubIssue> for Issue {
    fn from(wire: GithubIssue) -> Self {
        Issue {
            number: wire.number,
            title: wire.title,
            html_url: wire.html_url,
            comments: wire.comments,
            created_at: wire.created_at,
            updated_at: wire.updated_at,
            assignees: wire
                .assignees
                .into_iter()
                .map(|user| Assignee { login: user.login })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_typical_issue() {
        let json = r#"{
            "number": 1347,
            "title": "Found a bug",
            "html_url": "https://github.com/octocat/Hello-World/issues/1347",
            "comments": 2,
            "created_at": "2024-04-22T13:33:48Z",
            "updated_at": "2024-04-23T09:12:00Z",
            "assignees": [{"login": "octocat"}, {"login": "hubot"}],
            "state": "open",
            "labels": []
        }"#;

        let wire: GithubIssue = serde_json::from_str(json).unwrap();
        assert_eq!(wire.number, 1347);
        assert_eq!(wire.title.as_deref(), Some("Found a bug"));
        assert_eq!(wire.assignees.len(), 2);

        let issue: Issue = wire.into();
        assert!(issue.is_assigned_to("hubot"));
        assert_eq!(issue.comments, Some(2));
    }

    #[test]
    fn tolerates_missing_fields() {
        let wire: GithubIssue = serde_json::from_str(r#"{"number": 9}"#).unwrap();
        let issue: Issue = wire.into();
        assert_eq!(issue.number, 9);
        assert!(issue.title.is_none());
        assert!(issue.created_at.is_none());
        assert!(issue.assignees.is_empty());
    }

    #[test]
    fn tolerates_assignee_without_login() {
        let wire: GithubIssue =
            serde_json::from_str(r#"{"number": 9, "assignees": [{}]}"#).unwrap();
        let issue: Issue = wire.into();
        assert_eq!(issue.assignees.len(), 1);
        assert!(issue.assignees[0].login.is_none());
    }
}

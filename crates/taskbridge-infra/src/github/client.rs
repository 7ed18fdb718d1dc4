//! GithubClient -- concrete [`IssueTracker`] implementation for the
//! GitHub-compatible issues API.
//!
//! The access token is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use taskbridge_core::tracker::IssueTracker;
use taskbridge_types::config::TrackerConfig;
use taskbridge_types::error::TrackerError;
use taskbridge_types::issue::{Issue, IssueState};

use super::types::GithubIssue;

/// Issue tracker client for one repository.
pub struct GithubClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
    owner: String,
    repo: String,
}

impl GithubClient {
    /// Media type pinned for the issues API.
    const ACCEPT: &'static str = "application/vnd.github+json";

    /// Create a client for the configured repository.
    pub fn new(config: &TrackerConfig, token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("taskbridge/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repo: config.repo.clone(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the issues listing URL for a state filter.
    fn issues_url(&self, state: IssueState) -> String {
        format!(
            "{}/repos/{}/{}/issues?state={}&per_page=100",
            self.base_url, self.owner, self.repo, state
        )
    }

    /// Map a non-success status to a [`TrackerError`].
    fn error_for_status(status: u16, body: String) -> TrackerError {
        match status {
            401 => TrackerError::AuthenticationFailed,
            403 | 429 => TrackerError::RateLimited,
            _ => TrackerError::Api {
                status,
                message: body,
            },
        }
    }
}

// GithubClient intentionally does NOT derive Debug so the token can never
// leak through formatting.

impl IssueTracker for GithubClient {
    async fn list_issues(&self, state: IssueState) -> Result<Vec<Issue>, TrackerError> {
        let url = self.issues_url(state);

        tracing::debug!(%url, "listing issues");

        let response = self
            .client
            .get(&url)
            .header("accept", Self::ACCEPT)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| TrackerError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status.as_u16(), body));
        }

        let issues: Vec<GithubIssue> = response
            .json()
            .await
            .map_err(|e| TrackerError::Deserialization(e.to_string()))?;

        Ok(issues.into_iter().map(Issue::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_client() -> GithubClient {
        let config = TrackerConfig {
            owner: "example-org".to_string(),
            repo: "todo".to_string(),
            api_base: "https://api.github.com".to_string(),
            timeout_secs: 10,
        };
        GithubClient::new(&config, SecretString::from("test-token-not-real"))
    }

    #[test]
    fn test_issues_url() {
        let client = make_client();
        assert_eq!(
            client.issues_url(IssueState::Open),
            "https://api.github.com/repos/example-org/todo/issues?state=open&per_page=100"
        );
        assert_eq!(
            client.issues_url(IssueState::All),
            "https://api.github.com/repos/example-org/todo/issues?state=all&per_page=100"
        );
    }

    #[test]
    fn test_base_url_override_trims_trailing_slash() {
        let client = make_client().with_base_url("http://localhost:8080/".to_string());
        assert!(client
            .issues_url(IssueState::Open)
            .starts_with("http://localhost:8080/repos/"));
    }

    #[test]
    fn test_error_for_status_mapping() {
        assert!(matches!(
            GithubClient::error_for_status(401, String::new()),
            TrackerError::AuthenticationFailed
        ));
        assert!(matches!(
            GithubClient::error_for_status(403, String::new()),
            TrackerError::RateLimited
        ));
        assert!(matches!(
            GithubClient::error_for_status(429, String::new()),
            TrackerError::RateLimited
        ));
        assert!(matches!(
            GithubClient::error_for_status(502, String::new()),
            TrackerError::Api { status: 502, .. }
        ));
    }
}

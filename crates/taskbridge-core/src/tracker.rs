//! Issue-tracker port.
//!
//! The concrete HTTP client lives in taskbridge-infra; core code and tests
//! program against this trait.

use taskbridge_types::error::TrackerError;
use taskbridge_types::issue::{Issue, IssueState};

/// Read-only access to the tracked repository's issues.
pub trait IssueTracker: Send + Sync {
    /// List issues matching the given state filter, in tracker order.
    fn list_issues(
        &self,
        state: IssueState,
    ) -> impl std::future::Future<Output = Result<Vec<Issue>, TrackerError>> + Send;
}

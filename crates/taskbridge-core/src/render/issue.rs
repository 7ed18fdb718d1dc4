//! Issue description rendering.
//!
//! Turns tracker issues into the chat-markdown blocks delivered to users.
//! A record missing any required display field is malformed: `render_issue`
//! rejects it, and `render_issues` logs and skips it so one bad record never
//! hides the rest of the list.

use std::fmt::Write as _;

use taskbridge_types::error::RenderError;
use taskbridge_types::issue::Issue;

/// Separator inserted between consecutive issue blocks.
pub const DIVIDER: &str = "━━━━━━━━━━";

/// Fixed reply when no issue renders successfully.
pub const NO_OPEN_ISSUES: &str = "No open issues found.";

/// Render a single issue as a chat-markdown block.
///
/// The timestamps line embeds each instant twice: once as an absolute
/// timestamp marker and once as a relative ("time ago") marker. The chat
/// client expands both forms; collapsing them to one marker would lose the
/// dual display.
pub fn render_issue(issue: &Issue) -> Result<String, RenderError> {
    let malformed = || RenderError::MalformedIssue {
        number: issue.number.to_string(),
    };

    let title = issue.title.as_deref().ok_or_else(malformed)?;
    let url = issue.html_url.as_deref().ok_or_else(malformed)?;
    let comments = issue.comments.ok_or_else(malformed)?;
    let created = issue.created_at.ok_or_else(malformed)?;
    let updated = issue.updated_at.ok_or_else(malformed)?;

    let mut content = String::new();
    let _ = writeln!(content, "Issue: [**{title}**](<{url}>) ({comments} comments)");

    if issue.assignees.is_empty() {
        content.push_str("No assignees.");
    } else {
        content.push_str("Assigned to:");
        for assignee in &issue.assignees {
            if let Some(login) = assignee.login.as_deref() {
                let _ = write!(content, " {login}");
            }
        }
    }
    content.push('\n');

    let _ = writeln!(
        content,
        "Created at <t:{c}> (<t:{c}:R>), updated at <t:{u}> (<t:{u}:R>)",
        c = created.timestamp(),
        u = updated.timestamp(),
    );

    Ok(content)
}

/// Render a collection of issues, in the given order, joined by [`DIVIDER`]
/// lines.
///
/// Malformed records are logged and skipped; they never abort the listing.
/// Returns [`NO_OPEN_ISSUES`] when nothing rendered.
pub fn render_issues(issues: &[Issue]) -> String {
    let mut content = String::new();

    for issue in issues {
        let description = match render_issue(issue) {
            Ok(description) => description,
            Err(err) => {
                tracing::warn!(number = issue.number, error = %err, "skipping malformed issue");
                continue;
            }
        };

        if !content.is_empty() {
            content.push_str(DIVIDER);
            content.push('\n');
        }
        content.push_str(&description);
    }

    if content.is_empty() {
        return NO_OPEN_ISSUES.to_string();
    }

    content
}

//! Publisher: one combined comment per run.
//!
//! All entries generated in a run are joined under a fixed header/footer
//! and posted as a single new issue comment. Existing comments are never
//! edited. Posting failures are logged and swallowed; the unreviewed
//! commits simply stay eligible for the next run.

use tracing::{error, info};

use crate::github::GitHubClient;
use crate::ledger::REVIEW_BANNER;

pub const COMMENT_HEADER: &str = "🎓 **AI Mentor Review** - ახალი კომიტების განხილვა\n\n";
pub const COMMENT_FOOTER: &str = "\n\n---\n\n💡 *ეს feedback გენერირებულია AI-ის მიერ.*";
pub const ENTRY_SEPARATOR: &str = "\n\n---\n\n";

/// Joins the run's entries into the combined comment body.
///
/// `None` when there is nothing to post.
pub fn compose_comment(entries: &[String]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    Some(format!(
        "{}{}{}",
        COMMENT_HEADER,
        entries.join(ENTRY_SEPARATOR),
        COMMENT_FOOTER
    ))
}

/// Wraps the combined body with the banner line the ledger reader keys on.
pub fn render_post_body(combined: &str) -> String {
    format!("### {REVIEW_BANNER}\n\n{combined}")
}

/// Posts the combined comment, if any. Returns whether a comment was
/// actually created. Never fails the run: non-201 statuses and transport
/// errors are logged and reported as "not posted".
pub async fn publish(client: &GitHubClient, pr_number: u64, entries: &[String]) -> bool {
    let Some(combined) = compose_comment(entries) else {
        info!("no new commits to review");
        return false;
    };

    let body = render_post_body(&combined);
    match client.create_issue_comment(pr_number, &body).await {
        Ok(status) if status.as_u16() == 201 => {
            info!(entries = entries.len(), "comment posted");
            true
        }
        Ok(status) => {
            error!(status = status.as_u16(), "failed to post comment");
            false
        }
        Err(e) => {
            error!(error = %e, "failed to post comment");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::extract_reviewed_ids;
    use crate::review::format_entry;
    use std::collections::HashSet;

    #[test]
    fn empty_run_composes_nothing() {
        assert!(compose_comment(&[]).is_none());
    }

    #[test]
    fn single_entry_has_header_and_footer() {
        let entries = vec![format_entry("aaaaaaa", "init", "კარგია")];
        let body = compose_comment(&entries).unwrap();
        assert!(body.starts_with(COMMENT_HEADER));
        assert!(body.ends_with(COMMENT_FOOTER));
        assert!(body.contains("**[`aaaaaaa`]** init"));
    }

    #[test]
    fn entries_are_separated_by_horizontal_rule() {
        let entries = vec![
            format_entry("aaaaaaa", "first", "f1"),
            format_entry("bbbbbbb", "second", "f2"),
        ];
        let body = compose_comment(&entries).unwrap();
        let inner = body
            .strip_prefix(COMMENT_HEADER)
            .and_then(|s| s.strip_suffix(COMMENT_FOOTER))
            .unwrap();
        let parts: Vec<&str> = inner.split(ENTRY_SEPARATOR).collect();
        assert_eq!(parts.len(), 2);
        assert!(parts[1].starts_with("**[`bbbbbbb`]**"));
    }

    /// The whole system hinges on this: what the publisher writes, the
    /// ledger reader must recover on the next run.
    #[test]
    fn posted_body_round_trips_through_the_ledger() {
        let entries = vec![
            format_entry("7b3f1a2", "fix grid", "გამარჯობა!"),
            format_entry("09cafe3", "add form", "კარგი ფორმაა"),
        ];
        let body = render_post_body(&compose_comment(&entries).unwrap());
        let ids = extract_reviewed_ids([body.as_str()]);
        assert_eq!(
            ids,
            HashSet::from(["7b3f1a2".to_string(), "09cafe3".to_string()])
        );
    }
}

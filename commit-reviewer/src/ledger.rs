//! Review ledger recovered from the PR comment thread.
//!
//! The bot has no database: the comment thread is the durable record of
//! what was already reviewed. Every posted entry starts with the marker
//! ``**[`<short sha>`]**`` and every bot comment carries the banner line,
//! so scanning banner-bearing comments with one regex rebuilds the full
//! set of reviewed short SHAs.
//!
//! Any fetch/parse failure degrades to an empty ledger (fail-open): the
//! worst case is a duplicate review, never an aborted run.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::github::GitHubClient;

/// Banner identifying bot-authored review comments. Included in every
/// posted comment (see `publish`); comments without it are ignored here.
pub const REVIEW_BANNER: &str = "🎓 კომიტების მიმოხილვა (AI Mentor)";

static MARKER_RE: OnceLock<Regex> = OnceLock::new();

/// Marker pattern matching the entry prefix produced by `review::format_entry`.
/// The two formats must stay in lockstep or future runs lose the history.
fn marker_re() -> &'static Regex {
    MARKER_RE.get_or_init(|| Regex::new(r"\*\*\[`([a-f0-9]+)`\]\*\*").unwrap())
}

/// Extracts the union of reviewed short SHAs from comment bodies.
///
/// Only comments containing [`REVIEW_BANNER`] are scanned; within them,
/// every marker occurrence contributes its captured hex run.
pub fn extract_reviewed_ids<'a, I>(bodies: I) -> HashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let re = marker_re();
    let mut out = HashSet::new();
    for body in bodies {
        if !body.contains(REVIEW_BANNER) {
            continue;
        }
        for caps in re.captures_iter(body) {
            out.insert(caps[1].to_string());
        }
    }
    out
}

/// Fetches the PR's comments and rebuilds the reviewed set.
///
/// Fail-open: transport or decode failures are logged at `warn` and yield
/// an empty set.
pub async fn fetch_reviewed_ids(client: &GitHubClient, pr_number: u64) -> HashSet<String> {
    match client.list_issue_comments(pr_number).await {
        Ok(bodies) => {
            let ids = extract_reviewed_ids(bodies.iter().map(String::as_str));
            debug!(count = ids.len(), "existing reviews recovered from thread");
            ids
        }
        Err(e) => {
            warn!(error = %e, "could not fetch existing comments; treating ledger as empty");
            HashSet::new()
        }
    }
}

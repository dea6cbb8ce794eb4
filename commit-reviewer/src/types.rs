//! Normalized data model for PR commits and their changed files.
//!
//! These types are the output of the GitHub client and the input to the
//! classifier/prompt stages. Nothing here is persisted; every run rebuilds
//! them from the API.

use chrono::{DateTime, Utc};

/// A single commit belonging to the PR.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// Full commit SHA.
    pub id: String,
    /// First 7 hex chars of the SHA; this is the identifier written into
    /// (and later re-parsed from) the posted comment.
    pub short_id: String,
    /// Full commit message.
    pub message: String,
    pub author_name: Option<String>,
    pub authored_at: Option<DateTime<Utc>>,
}

impl CommitInfo {
    /// Truncates a full SHA to the short form used in comment markers.
    pub fn short_sha(sha: &str) -> String {
        sha.get(..7).unwrap_or(sha).to_string()
    }
}

/// One file touched by a commit.
#[derive(Debug, Clone)]
pub struct ChangedFile {
    /// Repo-relative path.
    pub path: String,
    /// Provider status string ("added" / "modified" / "removed" / ...),
    /// embedded verbatim into the prompt.
    pub status: String,
    /// Unified diff text; absent for binary or too-large files.
    pub patch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_sha_truncates_to_seven() {
        assert_eq!(
            CommitInfo::short_sha("7b3f1a2deadbeefdeadbeefdeadbeefdeadbeef0"),
            "7b3f1a2"
        );
    }

    #[test]
    fn short_sha_keeps_already_short_input() {
        assert_eq!(CommitInfo::short_sha("ab12"), "ab12");
    }
}

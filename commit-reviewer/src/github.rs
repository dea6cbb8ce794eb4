//! GitHub provider (REST v3) for PR commits, diffs, and issue comments.
//!
//! Endpoints used (as of 2025):
//! - GET  /repos/{repo}/pulls/{number}/commits   (per_page=100, single page)
//! - GET  /repos/{repo}/commits/{sha}            (field "patch" is unified diff)
//! - GET  /repos/{repo}/issues/{number}/comments (per_page=100, single page)
//! - POST /repos/{repo}/issues/{number}/comments

use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::errors::BotResult;
use crate::types::{ChangedFile, CommitInfo};

/// Fixed page size for commit and comment listings. One page only; the
/// original action never follows pagination cursors.
const PAGE_SIZE: u32 = 100;

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    base_api: String, // e.g. "https://api.github.com"
    repo: String,     // "owner/repo"
    token: String,    // PAT or the Actions-provided GITHUB_TOKEN
}

impl GitHubClient {
    /// Constructs a client with a shared reqwest instance and auth token.
    pub fn new(base_api: String, repo: String, token: String) -> BotResult<Self> {
        let http = Client::builder().user_agent("pr-mentor/0.1").build()?;
        Ok(Self {
            http,
            base_api: base_api.trim_end_matches('/').to_string(),
            repo,
            token,
        })
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// Fetches the PR's commits in API order (typically chronological).
    pub async fn list_pr_commits(&self, pr_number: u64) -> BotResult<Vec<CommitInfo>> {
        let url = format!(
            "{}/repos/{}/pulls/{}/commits",
            self.base_api, self.repo, pr_number
        );
        let raw: Vec<GitHubPrCommit> = self
            .http
            .get(url)
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_JSON)
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let commits = raw
            .into_iter()
            .map(|c| CommitInfo {
                short_id: CommitInfo::short_sha(&c.sha),
                id: c.sha,
                message: c.commit.message,
                author_name: c.commit.author.as_ref().and_then(|a| a.name.clone()),
                authored_at: c.commit.author.and_then(|a| a.date),
            })
            .collect();

        Ok(commits)
    }

    /// Fetches one commit's changed files with their unified-diff patches.
    ///
    /// Binary/too-large files come back without a `patch`; the commit-level
    /// `files` array itself may be absent, both tolerated via defaults.
    pub async fn get_commit_files(&self, sha: &str) -> BotResult<Vec<ChangedFile>> {
        let url = format!("{}/repos/{}/commits/{}", self.base_api, self.repo, sha);
        let raw: GitHubCommitDetail = self
            .http
            .get(url)
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_JSON)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let files = raw
            .files
            .into_iter()
            .map(|f| ChangedFile {
                path: f.filename,
                status: f.status,
                patch: f.patch,
            })
            .collect();

        Ok(files)
    }

    /// Fetches the PR's issue-comment bodies (one page).
    pub async fn list_issue_comments(&self, pr_number: u64) -> BotResult<Vec<String>> {
        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.base_api, self.repo, pr_number
        );
        let raw: Vec<GitHubIssueComment> = self
            .http
            .get(url)
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_JSON)
            .query(&[("per_page", PAGE_SIZE)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(raw.into_iter().map(|c| c.body).collect())
    }

    /// Creates a new issue comment on the PR and returns the HTTP status.
    ///
    /// The caller decides what a non-201 means; this method only fails on
    /// transport errors.
    pub async fn create_issue_comment(&self, pr_number: u64, body: &str) -> BotResult<StatusCode> {
        let url = format!(
            "{}/repos/{}/issues/{}/comments",
            self.base_api, self.repo, pr_number
        );
        let resp = self
            .http
            .post(url)
            .header("Authorization", self.auth_header())
            .header("Accept", ACCEPT_JSON)
            .json(&CreateCommentRequest { body })
            .send()
            .await?;

        Ok(resp.status())
    }
}

/// --- GitHub response shapes (subset of fields we actually use) ---

#[derive(Debug, Deserialize)]
struct GitHubPrCommit {
    sha: String,
    commit: GitHubCommitMeta,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitMeta {
    message: String,
    #[serde(default)]
    author: Option<GitHubGitAuthor>,
}

#[derive(Debug, Deserialize)]
struct GitHubGitAuthor {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitDetail {
    #[serde(default)]
    files: Vec<GitHubCommitFile>,
}

#[derive(Debug, Deserialize)]
struct GitHubCommitFile {
    filename: String,
    status: String,
    #[serde(default)]
    patch: Option<String>, // unified diff; None for binary/too large
}

#[derive(Debug, Deserialize)]
struct GitHubIssueComment {
    #[serde(default)]
    body: String,
}

#[derive(Debug, Serialize)]
struct CreateCommentRequest<'a> {
    body: &'a str,
}

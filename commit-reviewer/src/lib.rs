//! Public entry for the commit-review pipeline.
//!
//! Single high-level function to review the new commits of a pull request.
//!
//! 1) **Step 1 — Ledger**
//!    - Build the GitHub client
//!    - Recover already-reviewed short SHAs from the PR comment thread
//!      (fail-open: on any failure the ledger is empty)
//!
//! 2) **Step 2 — Assignment context**
//!    - Scan the checkout for a task description file to ground the prompt
//!
//! 3) **Step 3 — Per-commit review**
//!    - List the PR's commits (failure here aborts the run)
//!    - For each unreviewed commit: fetch its changed files, keep the
//!      relevant ones, build the mentoring prompt, call Gemini once
//!    - Any per-commit failure skips that commit only; it stays eligible
//!      on the next run
//!
//! 4) **Step 4 — Publish**
//!    - Join all new entries into one comment and post it (no-op when
//!      nothing was reviewed; posting failures never abort)
//!
//! The pipeline is fully sequential; idempotency across runs comes from
//! the re-derived ledger, not from any lock. `tracing` is used for
//! step-level debug logging.

pub mod assignment;
pub mod classify;
pub mod config;
pub mod errors;
pub mod github;
pub mod ledger;
pub mod publish;
pub mod review;
pub mod types;

use std::path::Path;
use std::time::Instant;

use llm_service::GeminiService;
use tracing::{debug, error, info};

use config::RunContext;
use errors::BotResult;
use github::GitHubClient;

/// Counters for one pipeline run, for the final log line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunSummary {
    /// Commits listed on the PR.
    pub total_commits: usize,
    /// Commits newly reviewed this run.
    pub reviewed: usize,
    /// Commits skipped because the ledger already had them.
    pub skipped_existing: usize,
    /// Commits skipped because no relevant file changed.
    pub skipped_empty: usize,
    /// Commits skipped due to a fetch or generation failure.
    pub failed: usize,
    /// Whether a comment was actually created.
    pub posted: bool,
}

/// Run the whole pipeline for one PR and return the run counters.
///
/// `workdir` is the repository checkout scanned for the assignment file.
pub async fn run_review(ctx: &RunContext, workdir: &Path) -> BotResult<RunSummary> {
    let t0 = Instant::now();

    // ---------------------------
    // Step 1: client + ledger
    // ---------------------------
    debug!("step1: init github client");
    let client = GitHubClient::new(
        ctx.github_api.clone(),
        ctx.repo.clone(),
        ctx.github_token.clone(),
    )?;
    debug!("step1: read review ledger from comment thread");
    let reviewed_ids = ledger::fetch_reviewed_ids(&client, ctx.pr_number).await;
    debug!(
        "step1: ledger ready, known={} ({} ms)",
        reviewed_ids.len(),
        t0.elapsed().as_millis()
    );

    // ---------------------------
    // Step 2: assignment context
    // ---------------------------
    debug!("step2: locate assignment description");
    let assignment = assignment::find_assignment_text(workdir);
    match &assignment {
        Some(text) => debug!("step2: assignment found, len={}", text.len()),
        None => debug!("step2: no assignment file; prompt will use fallback notice"),
    }

    let llm = GeminiService::new(ctx.llm.clone())?;

    // ---------------------------
    // Step 3: per-commit review
    // ---------------------------
    debug!("step3: fetch pr commits");
    let commits = client.list_pr_commits(ctx.pr_number).await?;
    info!(count = commits.len(), pr = ctx.pr_number, "commits found in pr");

    let mut summary = RunSummary {
        total_commits: commits.len(),
        ..Default::default()
    };
    let mut entries: Vec<String> = Vec::new();

    for commit in &commits {
        if reviewed_ids.contains(&commit.short_id) {
            debug!(sha = %commit.short_id, "skip previously reviewed commit");
            summary.skipped_existing += 1;
            continue;
        }

        info!(
            sha = %commit.short_id,
            author = commit.author_name.as_deref().unwrap_or("unknown"),
            authored_at = ?commit.authored_at,
            "reviewing new commit"
        );

        let files = match client.get_commit_files(&commit.id).await {
            Ok(f) => f,
            Err(e) => {
                error!(sha = %commit.short_id, error = %e, "failed to fetch commit changes");
                summary.failed += 1;
                continue;
            }
        };

        // Empty/irrelevant commits are not written to the ledger: they get
        // re-examined every run, which is accepted behavior.
        let Some(content) = review::render_changed_content(&files) else {
            debug!(sha = %commit.short_id, "no relevant files changed, skipping");
            summary.skipped_empty += 1;
            continue;
        };
        debug!(sha = %commit.short_id, files = content.file_count, "analyzing changed files");

        let prompt = review::prompt::build_prompt(assignment.as_deref(), &content.text);
        let feedback = match llm.generate(&prompt).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                error!(sha = %commit.short_id, error = %e, "generation failed; commit stays eligible");
                summary.failed += 1;
                continue;
            }
        };

        entries.push(review::format_entry(
            &commit.short_id,
            &commit.message,
            &feedback,
        ));
        summary.reviewed += 1;
    }

    // ---------------------------
    // Step 4: publish
    // ---------------------------
    debug!("step4: publish combined comment, entries={}", entries.len());
    summary.posted = publish::publish(&client, ctx.pr_number, &entries).await;

    info!(
        reviewed = summary.reviewed,
        skipped_existing = summary.skipped_existing,
        skipped_empty = summary.skipped_empty,
        failed = summary.failed,
        posted = summary.posted,
        "run finished in {} ms",
        t0.elapsed().as_millis()
    );

    Ok(summary)
}

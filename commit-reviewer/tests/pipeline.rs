//! End-to-end pipeline runs against a mock GitHub + Gemini server.
//!
//! Canned fixtures: one eligible commit (mix of relevant and ignored
//! paths), one commit touching only an ignored directory, and one commit
//! already recorded in the comment-thread ledger. A second run, fed the
//! comment posted by the first, must generate nothing and post nothing.

use commit_reviewer::config::RunContext;
use commit_reviewer::publish::{compose_comment, render_post_body};
use commit_reviewer::review::format_entry;
use commit_reviewer::run_review;
use llm_service::GeminiModelConfig;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const REPO: &str = "octo/site";
const PR: u64 = 7;

const SHA_ELIGIBLE: &str = "aaaaaaa0000000000000000000000000000000000";
const SHA_VENDORED: &str = "bbbbbbb0000000000000000000000000000000000";
const SHA_REVIEWED: &str = "7b3f1a2dd00000000000000000000000000000000";

fn test_ctx(server_uri: &str) -> RunContext {
    let mut llm = GeminiModelConfig::new("gemini-test", "test-key");
    llm.endpoint = server_uri.to_string();
    RunContext {
        repo: REPO.to_string(),
        pr_number: PR,
        github_token: "gh-token".to_string(),
        github_api: server_uri.to_string(),
        llm,
    }
}

fn commits_fixture() -> serde_json::Value {
    json!([
        {
            "sha": SHA_ELIGIBLE,
            "commit": {
                "message": "add app page",
                "author": { "name": "student", "date": "2026-08-20T10:00:00Z" }
            }
        },
        {
            "sha": SHA_VENDORED,
            "commit": {
                "message": "vendor deps",
                "author": { "name": "student", "date": "2026-08-20T11:00:00Z" }
            }
        },
        {
            "sha": SHA_REVIEWED,
            "commit": {
                "message": "old reviewed commit",
                "author": { "name": "student", "date": "2026-08-19T09:00:00Z" }
            }
        }
    ])
}

/// A bot comment as a previous run would have posted it, marking
/// `SHA_REVIEWED`'s short id as already handled.
fn prior_bot_comment() -> String {
    render_post_body(
        &compose_comment(&[format_entry("7b3f1a2", "old reviewed commit", "კარგია")]).unwrap(),
    )
}

/// Mounts the fixtures shared by both runs. `expect_generations` /
/// `expect_posts` pin how often the LLM and the comment POST may be hit.
async fn mount_fixtures(
    server: &MockServer,
    comments: serde_json::Value,
    expect_eligible_detail: u64,
    expect_generations: u64,
    expect_posts: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/issues/{PR}/comments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(comments))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/pulls/{PR}/commits")))
        .respond_with(ResponseTemplate::new(200).set_body_json(commits_fixture()))
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits/{SHA_ELIGIBLE}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                { "filename": "src/app.ts", "status": "added", "patch": "+const app = 1;" },
                { "filename": "dist/bundle.js", "status": "added", "patch": "+var minified" }
            ]
        })))
        .expect(expect_eligible_detail)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits/{SHA_VENDORED}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [
                { "filename": "node_modules/pkg/index.js", "status": "added", "patch": "+x" }
            ]
        })))
        .expect(1)
        .mount(server)
        .await;

    // Ledgered commit: the skip happens before any detail fetch.
    Mock::given(method("GET"))
        .and(path(format!("/repos/{REPO}/commits/{SHA_REVIEWED}")))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-test:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "გამარჯობა! კარგი ნამუშევარია 👍" } ] } }
            ]
        })))
        .expect(expect_generations)
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/repos/{REPO}/issues/{PR}/comments")))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 1 })))
        .expect(expect_posts)
        .mount(server)
        .await;
}

/// Extracts the JSON body of the first received request matching
/// `method`/`path_part`.
async fn received_body(server: &MockServer, method: &str, path_part: &str) -> serde_json::Value {
    let requests = server.received_requests().await.unwrap();
    let req = requests
        .iter()
        .find(|r| r.method.as_str() == method && r.url.path().contains(path_part))
        .unwrap_or_else(|| panic!("no {method} request to {path_part}"));
    serde_json::from_slice(&req.body).unwrap()
}

#[tokio::test]
async fn reviews_only_eligible_commits_and_second_run_posts_nothing() {
    // ---- run 1: one eligible commit, one vendored-only, one ledgered ----
    let server = MockServer::start().await;
    let comments = json!([
        { "body": "human comment casually mentioning 7b3f1a2" },
        { "body": prior_bot_comment() }
    ]);
    mount_fixtures(&server, comments, 1, 1, 1).await;

    let workdir = tempfile::tempdir().unwrap();
    let summary = run_review(&test_ctx(&server.uri()), workdir.path())
        .await
        .unwrap();

    assert_eq!(summary.total_commits, 3);
    assert_eq!(summary.reviewed, 1);
    assert_eq!(summary.skipped_existing, 1);
    assert_eq!(summary.skipped_empty, 1);
    assert_eq!(summary.failed, 0);
    assert!(summary.posted);

    // The prompt only carries the relevant file of the eligible commit.
    let prompt_body = received_body(&server, "POST", ":generateContent").await;
    let prompt = prompt_body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("--- FILE: src/app.ts ---"));
    assert!(!prompt.contains("dist/bundle.js"));

    // The posted comment has exactly one block, for the eligible commit.
    let post = received_body(&server, "POST", "/issues/7/comments").await;
    let posted_body = post["body"].as_str().unwrap().to_string();
    assert!(posted_body.contains("**[`aaaaaaa`]** add app page"));
    assert!(!posted_body.contains("bbbbbbb"));
    assert!(!posted_body.contains("**[`7b3f1a2`]**"));

    drop(server); // verifies the expected call counts

    // ---- run 2: the comment just posted is now part of the thread ----
    let server = MockServer::start().await;
    let comments = json!([
        { "body": prior_bot_comment() },
        { "body": posted_body }
    ]);
    // Eligible commit is now ledgered: no detail fetch, no generation, no post.
    mount_fixtures(&server, comments, 0, 0, 0).await;

    let summary = run_review(&test_ctx(&server.uri()), workdir.path())
        .await
        .unwrap();

    assert_eq!(summary.reviewed, 0);
    assert_eq!(summary.skipped_existing, 2);
    assert_eq!(summary.skipped_empty, 1);
    assert!(!summary.posted);
}

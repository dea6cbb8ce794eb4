use std::error::Error;

use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use commit_reviewer::config::RunContext;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from a .env file when present. In CI the
    // configuration comes from the workflow environment instead.
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Missing secrets or a non-PR trigger end the run cleanly: there is no
    // user-facing error channel beyond the absence of a comment.
    let ctx = match RunContext::from_env() {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(error = %e, "missing or invalid run configuration");
            return Ok(());
        }
    };

    let workdir = std::env::current_dir()?;
    match commit_reviewer::run_review(&ctx, &workdir).await {
        Ok(summary) => info!(
            reviewed = summary.reviewed,
            posted = summary.posted,
            "review run complete"
        ),
        Err(e) => error!(error = %e, "review run aborted"),
    }

    Ok(())
}

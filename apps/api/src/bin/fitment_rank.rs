//! One-off batch scorer: `fitment-rank <job_id>`.
//!
//! Scores every application of a job through the external scoring service,
//! writes the results back, then prints the ranked board.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use uuid::Uuid;

use jd_api::config::RankConfig;
use jd_api::db::create_pool;
use jd_api::logging::init_tracing;
use jd_api::scoring::batch::score_job_applications;
use jd_api::scoring::client::HttpCandidateScorer;
use jd_api::scoring::ranking::{format_board, rank_applications};
use jd_api::scoring::store::{ApplicationStore, PgApplicationStore};

#[derive(Debug, Parser)]
#[command(name = "fitment-rank", about = "Score and rank all applications for a job")]
struct Cli {
    /// Job to score
    job_id: Uuid,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = RankConfig::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    let pool = create_pool(&config.database_url).await?;
    let store = PgApplicationStore::new(pool);
    let scorer = HttpCandidateScorer::new(config.score_base_url.clone())
        .context("Failed to build scoring client")?;
    info!("Scoring service: {}", config.score_base_url);

    let summary = score_job_applications(&store, &scorer, cli.job_id).await?;

    let applications = store.list_applications(cli.job_id).await?;
    println!("{}", format_board(&rank_applications(&applications)));

    info!(
        "done: {} updated, {} skipped",
        summary.updated, summary.skipped
    );
    Ok(())
}

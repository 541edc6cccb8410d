//! Batch fitment scoring: score every application of a job, one at a time.
//!
//! A failing candidate is logged and skipped; the batch always runs to the end.

use anyhow::{bail, Result};
use tracing::{error, info};
use uuid::Uuid;

use crate::scoring::client::{CandidateScorer, ScoreRequest};
use crate::scoring::store::ApplicationStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub updated: usize,
    pub skipped: usize,
}

/// Scores and persists every application for `job_id`.
/// Errors only when the job itself cannot be loaded.
pub async fn score_job_applications(
    store: &dyn ApplicationStore,
    scorer: &dyn CandidateScorer,
    job_id: Uuid,
) -> Result<BatchSummary> {
    let Some(job) = store.find_job(job_id).await? else {
        bail!("job not found: {job_id}");
    };

    let applications = store.list_applications(job_id).await?;
    info!("Scoring {} applications for job {job_id}", applications.len());

    let mut summary = BatchSummary::default();

    for application in &applications {
        let request = ScoreRequest::for_application(&job, application);

        let score = match scorer.score(&request).await {
            Ok(score) => score,
            Err(e) => {
                error!("error scoring candidate {}: {e}", application.candidate_id);
                summary.skipped += 1;
                continue;
            }
        };

        if let Err(e) = store.save_score(application.id, &score).await {
            error!("error saving score for candidate {}: {e:?}", application.candidate_id);
            summary.skipped += 1;
            continue;
        }

        info!("updated {} {}", application.candidate_id, score.fitment_score);
        summary.updated += 1;
    }

    Ok(summary)
}

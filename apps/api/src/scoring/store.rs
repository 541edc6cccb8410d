//! Persistence seam for the batch scorer.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::application::{ApplicationRow, JobRow};
use crate::scoring::client::FitmentScore;

#[async_trait]
pub trait ApplicationStore: Send + Sync {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>>;
    /// All applications for a job, joined with their candidates.
    async fn list_applications(&self, job_id: Uuid) -> Result<Vec<ApplicationRow>>;
    async fn save_score(&self, application_id: Uuid, score: &FitmentScore) -> Result<()>;
}

/// Postgres-backed store over the `jobs`, `applications` and `candidates` tables.
pub struct PgApplicationStore {
    pool: PgPool,
}

impl PgApplicationStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ApplicationStore for PgApplicationStore {
    async fn find_job(&self, job_id: Uuid) -> Result<Option<JobRow>> {
        sqlx::query_as::<_, JobRow>(
            r#"
            SELECT id, title, to_jsonb(skills) AS skills, description_raw, description
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(job_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Failed to load job {job_id}"))
    }

    async fn list_applications(&self, job_id: Uuid) -> Result<Vec<ApplicationRow>> {
        sqlx::query_as::<_, ApplicationRow>(
            r#"
            SELECT a.id,
                   a.candidate_id,
                   c.display_name,
                   c.email,
                   c.resume_url,
                   c.github,
                   c.linkedin,
                   to_jsonb(c.skills) AS skills,
                   to_jsonb(c.skills_text) AS skills_text,
                   a.fitment_score::float8 AS fitment_score,
                   a.sub_scores::jsonb AS sub_scores
            FROM applications a
            LEFT JOIN candidates c ON c.id = a.candidate_id
            WHERE a.job_id = $1
            ORDER BY a.created_at
            "#,
        )
        .bind(job_id)
        .fetch_all(&self.pool)
        .await
        .with_context(|| format!("Failed to load applications for job {job_id}"))
    }

    async fn save_score(&self, application_id: Uuid, score: &FitmentScore) -> Result<()> {
        sqlx::query("UPDATE applications SET fitment_score = $1, sub_scores = $2 WHERE id = $3")
            .bind(score.fitment_score)
            .bind(score.sub_scores.clone())
            .bind(application_id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to save score for application {application_id}"))?;
        Ok(())
    }
}

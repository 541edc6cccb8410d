use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A posted job, as read by the batch scorer.
///
/// `skills` is selected through `to_jsonb` so both `text[]` and `jsonb` columns decode.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: Option<String>,
    pub skills: Option<Value>,
    pub description_raw: Option<String>,
    pub description: Option<String>,
}

/// An application joined with its candidate.
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub resume_url: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub skills: Option<Value>,
    pub skills_text: Option<Value>,
    pub fitment_score: Option<f64>,
    pub sub_scores: Option<Value>,
}

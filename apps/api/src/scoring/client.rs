//! HTTP client for the external scoring service (`POST <base>/score`).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::application::{ApplicationRow, JobRow};

const SCORE_ENDPOINT: &str = "/score";
const HTTP_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("scoring failed with status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("fitment_score is not numeric: {0}")]
    InvalidScore(Value),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire payloads
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreRequest {
    pub job: ScoreJob,
    pub candidate: ScoreCandidate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreJob {
    pub title: Option<String>,
    pub skills_required: Value,
    pub raw_jd: String,
    pub generated_jd: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCandidate {
    pub resume_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub profile: CandidateProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    /// Passed through as stored: usually a list of strings.
    pub skills: Value,
    pub experience_years: u32,
    pub projects: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    #[serde(default)]
    fitment_score: Value,
    #[serde(default)]
    sub_scores: Option<Value>,
}

/// A score ready to be written back to an application.
#[derive(Debug, Clone, PartialEq)]
pub struct FitmentScore {
    pub fitment_score: f64,
    pub sub_scores: Option<Value>,
}

impl ScoreRequest {
    /// Builds the payload for one application of `job`.
    pub fn for_application(job: &JobRow, application: &ApplicationRow) -> Self {
        ScoreRequest {
            job: ScoreJob {
                title: job.title.clone(),
                skills_required: truthy(job.skills.as_ref())
                    .cloned()
                    .unwrap_or_else(empty_list),
                raw_jd: job.description_raw.clone().unwrap_or_default(),
                generated_jd: job.description.clone().unwrap_or_default(),
            },
            candidate: ScoreCandidate {
                resume_url: application.resume_url.clone(),
                github_url: application.github.clone(),
                linkedin_url: application.linkedin.clone(),
                profile: CandidateProfile {
                    skills: truthy(application.skills_text.as_ref())
                        .or_else(|| truthy(application.skills.as_ref()))
                        .cloned()
                        .unwrap_or_else(empty_list),
                    experience_years: 0,
                    projects: Vec::new(),
                },
            },
        }
    }
}

/// `null` and `""` count as absent; everything else, including `[]`, is kept.
fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| match v {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

/// Missing, `null` and `""` read as 0; numeric strings are parsed.
fn parse_score(value: &Value) -> Result<f64, ScoringError> {
    match value {
        Value::Null => Ok(0.0),
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ScoringError::InvalidScore(value.clone())),
        Value::String(s) if s.trim().is_empty() => Ok(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| ScoringError::InvalidScore(value.clone())),
        _ => Err(ScoringError::InvalidScore(value.clone())),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scorer trait + HTTP implementation
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait CandidateScorer: Send + Sync {
    async fn score(&self, request: &ScoreRequest) -> Result<FitmentScore, ScoringError>;
}

pub struct HttpCandidateScorer {
    client: Client,
    base_url: String,
}

impl HttpCandidateScorer {
    pub fn new(base_url: String) -> Result<Self, ScoringError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl CandidateScorer for HttpCandidateScorer {
    async fn score(&self, request: &ScoreRequest) -> Result<FitmentScore, ScoringError> {
        let url = format!("{}{}", self.base_url, SCORE_ENDPOINT);
        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoringError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: ScoreResponse = serde_json::from_str(&body)?;

        Ok(FitmentScore {
            fitment_score: parse_score(&parsed.fitment_score)?,
            sub_scores: parsed.sub_scores.filter(|v| !v.is_null()),
        })
    }
}

//! Axum route handlers for the JD composer.

use axum::{body::Bytes, extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::job::{GenerateJdResponse, JobPostingRequest};
use crate::state::AppState;

/// POST /generate_jd
///
/// Every field is optional. An empty or `null` body composes from nothing.
pub async fn handle_generate_jd(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateJdResponse>, AppError> {
    let request = parse_posting_request(&body)?;
    Ok(Json(state.composer.generate(&request).await))
}

fn parse_posting_request(body: &[u8]) -> Result<JobPostingRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(JobPostingRequest::default());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("request body is not valid JSON: {e}")))?;

    match value {
        Value::Null => Ok(JobPostingRequest::default()),
        Value::Object(_) => JobPostingRequest::deserialize(value)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("posting request rejected: {e}"))),
        _ => Err(AppError::Validation(
            "request body must be a JSON object".to_string(),
        )),
    }
}

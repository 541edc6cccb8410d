use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Reports the service version and which composition path is active.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let composer = if state.composer.has_external() {
        "external_with_fallback"
    } else {
        "deterministic"
    };
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jd-api",
        "composer": composer
    }))
}

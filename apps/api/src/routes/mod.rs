pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::composer::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate_jd", post(handlers::handle_generate_jd))
        .with_state(state)
}

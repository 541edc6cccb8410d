use crate::composer::JdComposer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the optional external generator; deterministic otherwise.
    pub composer: JdComposer,
}

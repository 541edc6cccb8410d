use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use jd_api::composer::JdComposer;
use jd_api::config::Config;
use jd_api::errors::catch_panic_layer;
use jd_api::llm_client;
use jd_api::logging::init_tracing;
use jd_api::routes::build_router;
use jd_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    init_tracing(env!("CARGO_CRATE_NAME"), &config.rust_log);

    info!("Starting JD API v{}", env!("CARGO_PKG_VERSION"));

    let composer = JdComposer::from_config(&config.composer());
    if composer.has_external() {
        info!(
            "External JD generation enabled (model: {}, timeout: {}s)",
            llm_client::MODEL,
            config.generation_timeout_secs
        );
    } else {
        info!("No generative API key set; using deterministic JD composer only");
    }

    let state = AppState { composer };

    let app = build_router(state)
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("local generate_jd server running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

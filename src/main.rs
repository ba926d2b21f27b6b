use axum::extract::State;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use tracing_subscriber::EnvFilter;

use ree_rerank::api;
use ree_rerank::config::Config;
use ree_rerank::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Scoring model: {}", config.model_version);
    tracing::info!("Max candidates per request: {}", config.max_candidates);

    let state = AppState::new(config.clone())?;

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/api/rerank", post(api::rerank::rerank))
        .route("/api/config", get(api::config::get_config))
        .route("/api/config", put(api::config::update_config))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "model_version": state.config.model_version,
    }))
}

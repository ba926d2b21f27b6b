use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use uuid::Uuid;

use crate::models::{RerankMetadata, RerankRequest, RerankResponse};
use crate::scoring;
use crate::state::AppState;

/// POST /api/rerank - Re-rank upstream search results:
///   1. Extract the five quality-signal categories per candidate
///   2. Weighted combination into a rerank score
///   3. 50/50 blend with the upstream hybrid score
///   4. Stable descending sort on the blended score
pub async fn rerank(
    State(state): State<AppState>,
    Json(req): Json<RerankRequest>,
) -> Result<Json<RerankResponse>, (StatusCode, String)> {
    let request_id = Uuid::new_v4();
    let weights = *state.weights.read();

    // An empty batch is a valid request, not an error
    if req.results.is_empty() {
        return Ok(Json(RerankResponse {
            results: Vec::new(),
            rerank_metadata: RerankMetadata {
                model_version: state.config.model_version.clone(),
                feature_weights: weights,
                processing_time_ms: 0.0,
                properties_reranked: 0,
            },
        }));
    }

    if req.results.len() > state.config.max_candidates {
        return Err((
            StatusCode::BAD_REQUEST,
            format!(
                "Too many candidates: {} (maximum {})",
                req.results.len(),
                state.config.max_candidates
            ),
        ));
    }

    let started = Instant::now();
    let results = scoring::rerank_batch(
        req.results,
        req.user_id.as_deref(),
        &weights,
        state.signals.as_ref(),
        Utc::now(),
    )
    .await;

    let processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;
    let properties_reranked = results.len();
    tracing::info!(
        "Request {request_id}: reranked {properties_reranked} properties for '{}' in {processing_time_ms:.2}ms",
        req.query
    );

    Ok(Json(RerankResponse {
        results,
        rerank_metadata: RerankMetadata {
            model_version: state.config.model_version.clone(),
            feature_weights: weights,
            processing_time_ms,
            properties_reranked,
        },
    }))
}

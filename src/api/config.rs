use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::config::FeatureWeights;
use crate::models::FeatureWeightsUpdate;
use crate::state::AppState;

/// GET /api/config - Current scoring configuration
pub async fn get_config(State(state): State<AppState>) -> Json<ScoringConfigResponse> {
    let weights = *state.weights.read();
    Json(ScoringConfigResponse {
        model_version: state.config.model_version.clone(),
        feature_weights: weights,
        max_candidates: state.config.max_candidates,
    })
}

#[derive(Serialize)]
pub struct ScoringConfigResponse {
    pub model_version: String,
    pub feature_weights: FeatureWeights,
    pub max_candidates: usize,
}

/// PUT /api/config - Update category weights at runtime.
///
/// The update is applied to a copy and validated first; an invalid set
/// (negative weight, sum away from 1) is rejected and the current weights
/// stay in effect.
pub async fn update_config(
    State(state): State<AppState>,
    Json(update): Json<FeatureWeightsUpdate>,
) -> Result<Json<FeatureWeights>, (StatusCode, String)> {
    let mut candidate = *state.weights.read();

    if let Some(w) = update.property_quality {
        candidate.property_quality = w;
    }
    if let Some(w) = update.seller_reputation {
        candidate.seller_reputation = w;
    }
    if let Some(w) = update.freshness {
        candidate.freshness = w;
    }
    if let Some(w) = update.engagement {
        candidate.engagement = w;
    }
    if let Some(w) = update.personalization {
        candidate.personalization = w;
    }

    candidate
        .validate()
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    *state.weights.write() = candidate;
    tracing::info!("Feature weights updated: {candidate:?}");

    Ok(Json(candidate))
}

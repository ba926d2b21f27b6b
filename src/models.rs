use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::FeatureWeights;

/// A property listing as supplied by the upstream search service.
///
/// Every field except `property_id` is optional: upstream records are often
/// partially filled and the extractors score whatever is present. Fields this
/// service does not model are preserved in `extra` and echoed back unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub property_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub area: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub has_videos: bool,
    #[serde(default)]
    pub virtual_tour_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub listing_type: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    /// Upstream fields this service does not interpret, passed through as-is.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One upstream result: a record plus its hybrid-search score.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateListing {
    /// Relevance score from the upstream hybrid search, expected in [0,1].
    pub score: f32,
    #[serde(flatten)]
    pub record: PropertyRecord,
}

/// Rerank request
#[derive(Debug, Clone, Deserialize)]
pub struct RerankRequest {
    pub query: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub results: Vec<CandidateListing>,
}

/// The five category scores, each in [0,1]. Returned per result so callers
/// can see why a listing moved.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureScores {
    pub completeness: f32,
    pub seller_reputation: f32,
    pub freshness: f32,
    pub engagement: f32,
    pub personalization: f32,
}

/// A reranked result: the original record with scores attached.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    #[serde(flatten)]
    pub record: PropertyRecord,
    pub original_score: f32,
    pub final_score: f32,
    pub rerank_features: FeatureScores,
}

/// Rerank response
#[derive(Debug, Clone, Serialize)]
pub struct RerankResponse {
    pub results: Vec<ScoredResult>,
    pub rerank_metadata: RerankMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct RerankMetadata {
    pub model_version: String,
    pub feature_weights: FeatureWeights,
    pub processing_time_ms: f64,
    pub properties_reranked: usize,
}

/// Partial weight update for PUT /api/config
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureWeightsUpdate {
    pub property_quality: Option<f32>,
    pub seller_reputation: Option<f32>,
    pub freshness: Option<f32>,
    pub engagement: Option<f32>,
    pub personalization: Option<f32>,
}

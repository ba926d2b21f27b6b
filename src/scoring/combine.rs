//! Weighted combination of category scores and blending with the upstream
//! hybrid-search score.

use std::cmp::Ordering;

use crate::config::FeatureWeights;
use crate::models::{FeatureScores, ScoredResult};

/// Share of the final score carried by the upstream hybrid score vs the
/// rerank score.
const ORIGINAL_SHARE: f32 = 0.5;
const RERANK_SHARE: f32 = 0.5;

/// Weighted sum of the five category scores. Categories are clamped to
/// [0,1] first so a misbehaving provider cannot push the result out of
/// range.
pub fn rerank_score(features: &FeatureScores, weights: &FeatureWeights) -> f32 {
    weights.property_quality * features.completeness.clamp(0.0, 1.0)
        + weights.seller_reputation * features.seller_reputation.clamp(0.0, 1.0)
        + weights.freshness * features.freshness.clamp(0.0, 1.0)
        + weights.engagement * features.engagement.clamp(0.0, 1.0)
        + weights.personalization * features.personalization.clamp(0.0, 1.0)
}

/// 50/50 blend of the upstream score and the rerank score. The upstream
/// score is documented as [0,1] but not enforced at the API boundary, so
/// it is clamped here to keep `final_score` bounded.
pub fn blend(original_score: f32, rerank_score: f32) -> f32 {
    ORIGINAL_SHARE * original_score.clamp(0.0, 1.0) + RERANK_SHARE * rerank_score
}

/// Stable descending sort on `final_score`. Ties keep the upstream
/// relative order, which makes reranking deterministic.
pub fn sort_by_final_score(results: &mut [ScoredResult]) {
    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });
}

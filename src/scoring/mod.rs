//! The re-ranking pipeline: feature extraction, weighted combination,
//! blending, and ordering.
//!
//! Scoring is pure per record; no candidate's score depends on another's.
//! A record whose signal lookups fail is degraded to documented neutral
//! constants instead of failing the batch.

pub mod combine;
pub mod completeness;
pub mod freshness;
pub mod signals;

use chrono::{DateTime, Utc};

use crate::config::FeatureWeights;
use crate::models::{CandidateListing, FeatureScores, PropertyRecord, ScoredResult};
use crate::scoring::signals::SignalProvider;

/// Score and reorder a batch of upstream candidates.
///
/// Returns the candidates sorted descending by `final_score`, ties keeping
/// their upstream order. Same inputs always produce the same output.
pub async fn rerank_batch(
    candidates: Vec<CandidateListing>,
    user_id: Option<&str>,
    weights: &FeatureWeights,
    provider: &dyn SignalProvider,
    now: DateTime<Utc>,
) -> Vec<ScoredResult> {
    let mut results = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        let features = extract_features(&candidate.record, user_id, provider, now).await;
        let rerank = combine::rerank_score(&features, weights);
        let final_score = combine::blend(candidate.score, rerank);

        results.push(ScoredResult {
            record: candidate.record,
            original_score: candidate.score,
            final_score,
            rerank_features: features,
        });
    }

    combine::sort_by_final_score(&mut results);
    results
}

/// Compute the five category scores for one record. Provider failures are
/// logged and replaced with the category's neutral fallback so the rest of
/// the batch is unaffected.
async fn extract_features(
    record: &PropertyRecord,
    user_id: Option<&str>,
    provider: &dyn SignalProvider,
    now: DateTime<Utc>,
) -> FeatureScores {
    let id = &record.property_id;

    let seller_reputation = match provider.seller_reputation(record, now).await {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("Seller reputation lookup failed for {id}, using neutral: {e}");
            signals::SELLER_REPUTATION_FALLBACK
        }
    };

    let engagement = match provider.engagement(record).await {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("Engagement lookup failed for {id}, using neutral: {e}");
            signals::ENGAGEMENT_FALLBACK
        }
    };

    let personalization = match provider.personalization(record, user_id).await {
        Ok(score) => score,
        Err(e) => {
            tracing::warn!("Personalization lookup failed for {id}, using neutral: {e}");
            signals::PERSONALIZATION_FALLBACK
        }
    };

    FeatureScores {
        completeness: completeness::property_quality(record),
        seller_reputation,
        freshness: freshness::freshness(record, now),
        engagement,
        personalization,
    }
}

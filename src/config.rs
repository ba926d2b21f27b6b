use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Version tag reported in rerank metadata
    pub model_version: String,
    /// Maximum number of candidates accepted per rerank request
    pub max_candidates: usize,
    /// Category weights applied by the combiner
    pub weights: FeatureWeights,
}

/// Weights for the five quality-signal categories. Must sum to 1.
///
/// Kept as data rather than hard-coded constants so weight experiments
/// only need a config change (or a PUT /api/config call at runtime).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeatureWeights {
    pub property_quality: f32,
    pub seller_reputation: f32,
    pub freshness: f32,
    pub engagement: f32,
    pub personalization: f32,
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            property_quality: 0.40,
            seller_reputation: 0.20,
            freshness: 0.15,
            engagement: 0.15,
            personalization: 0.10,
        }
    }
}

impl FeatureWeights {
    /// Reject weight sets that would break the [0,1] score contract.
    pub fn validate(&self) -> Result<()> {
        let all = [
            self.property_quality,
            self.seller_reputation,
            self.freshness,
            self.engagement,
            self.personalization,
        ];
        if all.iter().any(|w| *w < 0.0 || !w.is_finite()) {
            anyhow::bail!("Feature weights must be finite and non-negative");
        }
        let sum: f32 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-3 {
            anyhow::bail!("Feature weights must sum to 1.0, got {sum}");
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9100".to_string(),
            model_version: "rule-rerank-v1".to_string(),
            max_candidates: 200,
            weights: FeatureWeights::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("REE_RERANK_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(version) = std::env::var("REE_RERANK_MODEL_VERSION") {
            config.model_version = version;
        }
        if let Ok(val) = std::env::var("REE_RERANK_MAX_CANDIDATES") {
            if let Ok(v) = val.parse() {
                config.max_candidates = v;
            }
        }

        // Weight overrides
        if let Ok(val) = std::env::var("RERANK_WEIGHT_QUALITY") {
            if let Ok(v) = val.parse() {
                config.weights.property_quality = v;
            }
        }
        if let Ok(val) = std::env::var("RERANK_WEIGHT_SELLER") {
            if let Ok(v) = val.parse() {
                config.weights.seller_reputation = v;
            }
        }
        if let Ok(val) = std::env::var("RERANK_WEIGHT_FRESHNESS") {
            if let Ok(v) = val.parse() {
                config.weights.freshness = v;
            }
        }
        if let Ok(val) = std::env::var("RERANK_WEIGHT_ENGAGEMENT") {
            if let Ok(v) = val.parse() {
                config.weights.engagement = v;
            }
        }
        if let Ok(val) = std::env::var("RERANK_WEIGHT_PERSONALIZATION") {
            if let Ok(v) = val.parse() {
                config.weights.personalization = v;
            }
        }

        config
    }
}

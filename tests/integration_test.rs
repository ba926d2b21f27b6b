//! Integration tests for the re-ranking pipeline.
//!
//! These exercise the full scoring flow and the HTTP handlers directly,
//! without a running server or any external store.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Duration, TimeZone, Utc};

use ree_rerank::api;
use ree_rerank::config::{Config, FeatureWeights};
use ree_rerank::models::{CandidateListing, PropertyRecord, RerankRequest};
use ree_rerank::scoring;
use ree_rerank::scoring::signals::StubSignalProvider;
use ree_rerank::state::AppState;

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn bare_record(id: &str) -> PropertyRecord {
    PropertyRecord {
        property_id: id.to_string(),
        title: None,
        description: None,
        price: None,
        area: None,
        images: vec![],
        has_videos: false,
        virtual_tour_url: None,
        verified: false,
        created_at: None,
        updated_at: None,
        owner_id: None,
        district: None,
        property_type: None,
        listing_type: None,
        contact_phone: None,
        contact_name: None,
        extra: serde_json::Map::new(),
    }
}

/// Scenario listing A: strong upstream score, weak listing. Posted 90 days
/// ago, no images, no description, unverified.
fn listing_a() -> CandidateListing {
    CandidateListing {
        score: 0.90,
        record: PropertyRecord {
            title: Some("Bán nhà Quận 9".to_string()),
            price: Some(2_500_000_000.0),
            area: Some(60.0),
            district: Some("Quận 9".to_string()),
            property_type: Some("house".to_string()),
            listing_type: Some("sale".to_string()),
            created_at: Some(fixed_now() - Duration::days(90)),
            ..bare_record("a")
        },
    }
}

/// Scenario listing B: weaker upstream score, high-quality listing. Posted
/// 1 day ago, 6 images, keyword-rich description, verified.
fn listing_b() -> CandidateListing {
    CandidateListing {
        score: 0.75,
        record: PropertyRecord {
            title: Some("Căn hộ 2PN Thảo Điền".to_string()),
            description: Some(
                "Bán căn hộ 2 phòng ngủ 75m2 tại Quận 2, gần trung tâm, giá 3.5 tỷ có \
                 thương lượng. Nội khu nhiều tiện ích: hồ bơi, công viên, trường học, an ninh."
                    .to_string(),
            ),
            price: Some(3_500_000_000.0),
            area: Some(75.0),
            images: (0..6).map(|i| format!("img-{i}.jpg")).collect(),
            verified: true,
            district: Some("Quận 2".to_string()),
            property_type: Some("apartment".to_string()),
            listing_type: Some("sale".to_string()),
            contact_phone: Some("0901234567".to_string()),
            created_at: Some(fixed_now() - Duration::days(1)),
            ..bare_record("b")
        },
    }
}

#[tokio::test]
async fn test_quality_listing_overtakes_higher_upstream_score() {
    let results = scoring::rerank_batch(
        vec![listing_a(), listing_b()],
        None,
        &FeatureWeights::default(),
        &StubSignalProvider,
        fixed_now(),
    )
    .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].record.property_id, "b");
    let b = &results[0];
    let a = &results[1];
    assert!(b.final_score > a.final_score);
    // A still keeps its upstream advantage on record
    assert!(a.original_score > b.original_score);
    // And the feature breakdown explains the flip
    assert!(b.rerank_features.completeness > a.rerank_features.completeness);
    assert!(b.rerank_features.freshness > a.rerank_features.freshness);
}

#[tokio::test]
async fn test_record_missing_all_optional_data_scores_without_error() {
    let candidate = CandidateListing {
        score: 0.4,
        record: bare_record("sparse"),
    };
    let results = scoring::rerank_batch(
        vec![candidate],
        None,
        &FeatureWeights::default(),
        &StubSignalProvider,
        fixed_now(),
    )
    .await;

    assert_eq!(results.len(), 1);
    let r = &results[0];
    // Missing created_at degrades freshness decay to its neutral default
    assert!(r.rerank_features.freshness > 0.0);
    assert!((0.0..=1.0).contains(&r.final_score));
}

#[tokio::test]
async fn test_all_scores_bounded_across_varied_batch() {
    let candidates = vec![
        listing_a(),
        listing_b(),
        CandidateListing {
            score: 2.5, // out-of-contract upstream score
            record: bare_record("over"),
        },
        CandidateListing {
            score: 0.0,
            record: PropertyRecord {
                created_at: Some(fixed_now() + Duration::days(3)), // clock skew
                ..bare_record("future")
            },
        },
    ];
    let results = scoring::rerank_batch(
        candidates,
        Some("user-1"),
        &FeatureWeights::default(),
        &StubSignalProvider,
        fixed_now(),
    )
    .await;

    assert_eq!(results.len(), 4);
    for r in &results {
        assert!((0.0..=1.0).contains(&r.final_score), "{}", r.record.property_id);
        for score in [
            r.rerank_features.completeness,
            r.rerank_features.seller_reputation,
            r.rerank_features.freshness,
            r.rerank_features.engagement,
            r.rerank_features.personalization,
        ] {
            assert!((0.0..=1.0).contains(&score));
        }
    }
    for pair in results.windows(2) {
        assert!(pair[0].final_score >= pair[1].final_score);
    }
}

#[tokio::test]
async fn test_reranking_is_idempotent() {
    let candidates = vec![listing_a(), listing_b()];
    let first = scoring::rerank_batch(
        candidates.clone(),
        Some("user-1"),
        &FeatureWeights::default(),
        &StubSignalProvider,
        fixed_now(),
    )
    .await;
    let second = scoring::rerank_batch(
        candidates,
        Some("user-1"),
        &FeatureWeights::default(),
        &StubSignalProvider,
        fixed_now(),
    )
    .await;

    for (x, y) in first.iter().zip(&second) {
        assert_eq!(x.record.property_id, y.record.property_id);
        assert_eq!(x.final_score, y.final_score);
    }
}

#[tokio::test]
async fn test_rerank_handler_empty_batch() {
    let state = AppState::new(Config::default()).unwrap();
    let req = RerankRequest {
        query: "căn hộ quận 2".to_string(),
        user_id: None,
        results: vec![],
    };

    let Json(response) = api::rerank::rerank(State(state), Json(req)).await.unwrap();
    assert!(response.results.is_empty());
    assert_eq!(response.rerank_metadata.properties_reranked, 0);
}

#[tokio::test]
async fn test_rerank_handler_attaches_metadata() {
    let state = AppState::new(Config::default()).unwrap();
    let req = RerankRequest {
        query: "căn hộ quận 2".to_string(),
        user_id: Some("user-1".to_string()),
        results: vec![listing_a(), listing_b()],
    };

    let Json(response) = api::rerank::rerank(State(state), Json(req)).await.unwrap();
    assert_eq!(response.results.len(), 2);
    assert_eq!(response.rerank_metadata.properties_reranked, 2);
    assert_eq!(response.rerank_metadata.model_version, "rule-rerank-v1");
    assert_eq!(response.rerank_metadata.feature_weights.property_quality, 0.40);
    assert!(response.rerank_metadata.processing_time_ms >= 0.0);
}

#[tokio::test]
async fn test_rerank_handler_rejects_oversized_batch() {
    let mut config = Config::default();
    config.max_candidates = 2;
    let state = AppState::new(config).unwrap();
    let req = RerankRequest {
        query: "nhà".to_string(),
        user_id: None,
        results: vec![listing_a(), listing_b(), listing_a()],
    };

    let err = api::rerank::rerank(State(state), Json(req)).await.unwrap_err();
    assert_eq!(err.0, axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_config_rejects_invalid_weights_and_keeps_current() {
    let state = AppState::new(Config::default()).unwrap();

    let bad = ree_rerank::models::FeatureWeightsUpdate {
        property_quality: Some(0.90),
        seller_reputation: None,
        freshness: None,
        engagement: None,
        personalization: None,
    };
    let err = api::config::update_config(State(state.clone()), Json(bad))
        .await
        .unwrap_err();
    assert_eq!(err.0, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(state.weights.read().property_quality, 0.40);
}

#[tokio::test]
async fn test_update_config_applies_valid_weights() {
    let state = AppState::new(Config::default()).unwrap();

    // Shift 10 points from quality to freshness
    let update = ree_rerank::models::FeatureWeightsUpdate {
        property_quality: Some(0.30),
        seller_reputation: None,
        freshness: Some(0.25),
        engagement: None,
        personalization: None,
    };
    let Json(applied) = api::config::update_config(State(state.clone()), Json(update))
        .await
        .unwrap();
    assert_eq!(applied.property_quality, 0.30);
    assert_eq!(applied.freshness, 0.25);
    assert_eq!(state.weights.read().freshness, 0.25);
}

/// Provider whose backing stores are all unreachable.
struct UnavailableSignals;

#[async_trait::async_trait]
impl ree_rerank::scoring::signals::SignalProvider for UnavailableSignals {
    async fn seller_reputation(
        &self,
        _record: &PropertyRecord,
        _now: DateTime<Utc>,
    ) -> anyhow::Result<f32> {
        anyhow::bail!("seller store unreachable")
    }

    async fn engagement(&self, _record: &PropertyRecord) -> anyhow::Result<f32> {
        anyhow::bail!("analytics store unreachable")
    }

    async fn personalization(
        &self,
        _record: &PropertyRecord,
        _user_id: Option<&str>,
    ) -> anyhow::Result<f32> {
        anyhow::bail!("profile store unreachable")
    }
}

#[tokio::test]
async fn test_handler_degrades_when_signal_stores_unavailable() {
    use ree_rerank::scoring::signals;

    let state = AppState::new(Config::default())
        .unwrap()
        .with_signals(std::sync::Arc::new(UnavailableSignals));
    let req = RerankRequest {
        query: "nhà".to_string(),
        user_id: None,
        results: vec![listing_a(), listing_b()],
    };

    let Json(response) = api::rerank::rerank(State(state), Json(req)).await.unwrap();
    assert_eq!(response.results.len(), 2);
    for r in &response.results {
        assert_eq!(
            r.rerank_features.seller_reputation,
            signals::SELLER_REPUTATION_FALLBACK
        );
        assert_eq!(r.rerank_features.engagement, signals::ENGAGEMENT_FALLBACK);
        assert_eq!(
            r.rerank_features.personalization,
            signals::PERSONALIZATION_FALLBACK
        );
        // Locally-computed categories are unaffected
        assert!((0.0..=1.0).contains(&r.final_score));
    }
    // Quality still separates the two listings
    assert_eq!(response.results[0].record.property_id, "b");
}

#[tokio::test]
async fn test_request_wire_format_round_trip() {
    let body = serde_json::json!({
        "query": "căn hộ 2 phòng ngủ",
        "user_id": "user-42",
        "results": [
            {
                "property_id": "p-1",
                "score": 0.82,
                "title": "Căn hộ Thảo Điền",
                "price": 3.2e9,
                "area": 70.0,
                "images": ["a.jpg"],
                "verified": true,
                "created_at": "2024-06-10T00:00:00Z",
                "district": "Quận 2",
                "bedrooms": 2
            }
        ]
    });
    let req: RerankRequest = serde_json::from_value(body).unwrap();

    let state = AppState::new(Config::default()).unwrap();
    let Json(response) = api::rerank::rerank(State(state), Json(req)).await.unwrap();

    let value = serde_json::to_value(&response).unwrap();
    let result = &value["results"][0];
    assert_eq!(result["property_id"], "p-1");
    assert_eq!(result["bedrooms"], 2);
    assert!(result["final_score"].is_number());
    assert!((result["original_score"].as_f64().unwrap() - 0.82).abs() < 1e-6);
    assert!(result["rerank_features"]["completeness"].is_number());
    assert!(value["rerank_metadata"]["feature_weights"]["freshness"].is_number());
}

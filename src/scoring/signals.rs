//! Seller-reputation, engagement, and personalization signals.
//!
//! The data behind these categories (seller performance history, view and
//! inquiry telemetry, user preference profiles) does not exist yet, so the
//! shipped provider degrades to documented constants. This keeps the full
//! scoring formula runnable end-to-end today; a data-backed provider swaps
//! in behind [`SignalProvider`] without touching the combiner, as long as
//! it keeps the [0,1] output contract.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::models::PropertyRecord;

/// Historical seller performance until a seller-statistics store exists.
pub const HISTORICAL_PERFORMANCE_NEUTRAL: f32 = 0.7;
/// Recent view/inquiry/favorite activity until an analytics pipeline exists.
pub const ACTIVITY_NEUTRAL: f32 = 0.6;
/// Search click-through rate until an analytics pipeline exists.
pub const CLICK_THROUGH_NEUTRAL: f32 = 0.5;
/// Preference match for an identified user without a profile store.
pub const PREFERENCE_MATCH_KNOWN: f32 = 0.7;
/// Preference match for an anonymous request.
pub const PREFERENCE_MATCH_ANONYMOUS: f32 = 0.5;
/// Interaction history until a user-profile store exists.
pub const INTERACTION_HISTORY_NEUTRAL: f32 = 0.5;

/// Neutral category values substituted when a provider call fails, so one
/// bad record cannot take down the batch.
pub const SELLER_REPUTATION_FALLBACK: f32 = 0.6;
pub const ENGAGEMENT_FALLBACK: f32 = 0.55;
pub const PERSONALIZATION_FALLBACK: f32 = 0.5;

/// Pluggable source for the three externally-backed signal categories.
///
/// Async because real implementations will query stores over the network;
/// batch callers should issue one fetch per batch, not per record.
#[async_trait]
pub trait SignalProvider: Send + Sync {
    async fn seller_reputation(
        &self,
        record: &PropertyRecord,
        now: DateTime<Utc>,
    ) -> Result<f32>;

    async fn engagement(&self, record: &PropertyRecord) -> Result<f32>;

    async fn personalization(
        &self,
        record: &PropertyRecord,
        user_id: Option<&str>,
    ) -> Result<f32>;
}

/// The constant-returning provider shipped until the backing stores exist.
pub struct StubSignalProvider;

#[async_trait]
impl SignalProvider for StubSignalProvider {
    /// Historical performance is neutral; account age is approximated from
    /// the listing's own age (new <30 days, established <180, veteran
    /// beyond). Equal sub-weights.
    async fn seller_reputation(
        &self,
        record: &PropertyRecord,
        now: DateTime<Utc>,
    ) -> Result<f32> {
        let account_age = match record.created_at {
            Some(created) => {
                let age = now - created;
                if age < Duration::days(30) {
                    0.5
                } else if age < Duration::days(180) {
                    0.75
                } else {
                    1.0
                }
            }
            None => 0.5,
        };
        Ok((HISTORICAL_PERFORMANCE_NEUTRAL + account_age) / 2.0)
    }

    async fn engagement(&self, _record: &PropertyRecord) -> Result<f32> {
        Ok((ACTIVITY_NEUTRAL + CLICK_THROUGH_NEUTRAL) / 2.0)
    }

    async fn personalization(
        &self,
        _record: &PropertyRecord,
        user_id: Option<&str>,
    ) -> Result<f32> {
        let preference_match = if user_id.is_some() {
            PREFERENCE_MATCH_KNOWN
        } else {
            PREFERENCE_MATCH_ANONYMOUS
        };
        Ok((preference_match + INTERACTION_HISTORY_NEUTRAL) / 2.0)
    }
}

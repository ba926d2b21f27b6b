//! Freshness scoring: exponential age decay plus a recent-update bonus.
//!
//! "Now" is passed in by the caller so tests can pin it.

use chrono::{DateTime, Duration, Utc};

use crate::models::PropertyRecord;

/// Listing age at which the decay score halves.
pub const HALF_LIFE_DAYS: f32 = 30.0;

/// Decay score for a record with no usable creation timestamp.
pub const MISSING_CREATED_AT_DEFAULT: f32 = 0.5;

/// Share of the freshness category carried by the decay (10% of the
/// overall score) vs the update bonus (5%).
const DECAY_SHARE: f32 = 10.0 / 15.0;
const BONUS_SHARE: f32 = 5.0 / 15.0;

/// Exponential decay over listing age: `2^(-days / 30)`.
///
/// Day 0 scores 1.0, day 30 scores 0.5, day 90 scores 0.125. Future
/// timestamps (clock skew) clamp to age 0 instead of erroring.
pub fn decay(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> f32 {
    let Some(created) = created_at else {
        return MISSING_CREATED_AT_DEFAULT;
    };
    let days = ((now - created).num_seconds() as f32 / 86_400.0).max(0.0);
    (-days / HALF_LIFE_DAYS).exp2()
}

/// Recent-update bonus: full credit for an update within 7 days, half
/// within 30, none otherwise. Falls back to `created_at` when the record
/// has never been updated.
pub fn update_bonus(record: &PropertyRecord, now: DateTime<Utc>) -> f32 {
    let Some(updated) = record.updated_at.or(record.created_at) else {
        return 0.0;
    };
    let age = now - updated;
    if age <= Duration::days(7) {
        1.0
    } else if age <= Duration::days(30) {
        0.5
    } else {
        0.0
    }
}

/// The freshness category: decay and bonus weighted 10:5 within the
/// category's 15% share of the overall score.
pub fn freshness(record: &PropertyRecord, now: DateTime<Utc>) -> f32 {
    DECAY_SHARE * decay(record.created_at, now) + BONUS_SHARE * update_bonus(record, now)
}

//! Property-quality scoring: how complete and well-presented a listing is.
//!
//! Four sub-signals, each in [0,1], averaged into the property-quality
//! category: field coverage, image quality, description quality, and
//! verification status.

use crate::models::PropertyRecord;

/// Full credit window for description length, in characters.
const DESC_MIN_LEN: usize = 50;
const DESC_MAX_LEN: usize = 500;

/// Description keyword groups buyers actually search for. A description
/// earns credit per distinct group matched, capped at all five.
const KEYWORD_GROUPS: [&[&str]; 5] = [
    // price
    &["giá", "price", "tỷ", "ty", "triệu", "trieu", "vnd"],
    // area
    &["diện tích", "dien tich", "m2", "m²", "sqm", "area"],
    // rooms
    &["phòng ngủ", "phong ngu", "pn", "wc", "bedroom", "toilet", "phòng"],
    // location
    &["mặt tiền", "mat tien", "trung tâm", "trung tam", "gần", "gan", "quận", "quan", "đường", "hẻm"],
    // amenities
    &["tiện ích", "tien ich", "hồ bơi", "ho boi", "công viên", "cong vien", "trường học", "bệnh viện", "an ninh"],
];

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn has_positive(field: &Option<f64>) -> bool {
    field.is_some_and(|v| v > 0.0)
}

/// Weighted coverage of required (0.7) and optional (0.3) listing fields.
pub fn field_coverage(record: &PropertyRecord) -> f32 {
    let required = [
        has_text(&record.title),
        has_text(&record.description),
        has_positive(&record.price),
        has_positive(&record.area),
        has_text(&record.district),
        has_text(&record.property_type),
        has_text(&record.listing_type),
    ];
    let optional = [
        !record.images.is_empty(),
        record.has_videos,
        has_text(&record.virtual_tour_url),
        has_text(&record.contact_phone),
        has_text(&record.contact_name),
    ];

    let required_coverage =
        required.iter().filter(|p| **p).count() as f32 / required.len() as f32;
    let optional_coverage =
        optional.iter().filter(|p| **p).count() as f32 / optional.len() as f32;

    0.7 * required_coverage + 0.3 * optional_coverage
}

/// Media richness: image count saturates at 10, with bonuses for videos
/// (+0.1) and a virtual tour (+0.2). Capped at 1.0.
pub fn image_quality(record: &PropertyRecord) -> f32 {
    let mut score = (record.images.len() as f32 / 10.0).min(1.0);
    if record.has_videos {
        score += 0.1;
    }
    if has_text(&record.virtual_tour_url) {
        score += 0.2;
    }
    score.min(1.0)
}

/// Description quality: length window, domain keywords, shouting penalty.
pub fn description_quality(record: &PropertyRecord) -> f32 {
    let Some(description) = record.description.as_deref() else {
        return 0.0;
    };
    let description = description.trim();
    if description.is_empty() {
        return 0.0;
    }

    let len = description.chars().count();
    let length_score = if len < DESC_MIN_LEN {
        len as f32 / DESC_MIN_LEN as f32
    } else if len <= DESC_MAX_LEN {
        1.0
    } else {
        // Linear decline past the window, floored at 0.5 (1500+ chars)
        (1.0 - (len - DESC_MAX_LEN) as f32 / 2000.0).max(0.5)
    };

    let lower = description.to_lowercase();
    let matched_groups = KEYWORD_GROUPS
        .iter()
        .filter(|group| group.iter().any(|kw| lower.contains(kw)))
        .count();
    let keyword_score = matched_groups as f32 / KEYWORD_GROUPS.len() as f32;

    let score = 0.6 * length_score + 0.4 * keyword_score;

    // Shouting cap: >10% uppercase reads as spam
    let alphabetic = description.chars().filter(|c| c.is_alphabetic()).count();
    let uppercase = description.chars().filter(|c| c.is_uppercase()).count();
    if alphabetic > 0 && uppercase as f32 / alphabetic as f32 > 0.10 {
        return score.min(0.7);
    }

    score
}

/// Verified listings get full credit, unverified a neutral 0.5.
pub fn verification(record: &PropertyRecord) -> f32 {
    if record.verified {
        1.0
    } else {
        0.5
    }
}

/// The property-quality category: the four sub-signals contribute equally
/// (each is 10% of the overall score within the 40% category weight).
pub fn property_quality(record: &PropertyRecord) -> f32 {
    (field_coverage(record)
        + image_quality(record)
        + description_quality(record)
        + verification(record))
        / 4.0
}

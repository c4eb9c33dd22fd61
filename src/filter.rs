//! Attribute filtering over boundary datasets whose name columns differ
//! between publishers.

use serde_json::Value;
use tracing::debug;

use crate::models::{Feature, FeatureCollection};

/// District name columns seen in sub-district datasets, highest priority first
pub const DISTRICT_FIELDS: &[&str] = &[
    "DISTRICT",
    "DIST_NAME",
    "dtname",
    "District",
    "District_Name",
    "DistName",
];

/// State name columns seen in district datasets
pub const STATE_FIELDS: &[&str] = &["STATE", "ST_NM", "State_Name", "StateName", "stname"];

/// Sub-district (tehsil) name columns
pub const SUB_DISTRICT_FIELDS: &[&str] = &[
    "TEHSIL",
    "TEHSIL_NAM",
    "SUB_DIST",
    "SubDistrict",
    "Tehsil",
    "sdtname",
];

/// Keep features whose first populated candidate field equals `target`,
/// ignoring case and surrounding whitespace. Source order is preserved.
pub fn filter(
    collection: FeatureCollection,
    candidates: &[&str],
    target: &str,
) -> FeatureCollection {
    let total = collection.len();
    let target = normalize(target);

    let kept: FeatureCollection = collection
        .into_iter()
        .filter(|feature| matches_normalized(feature, candidates, &target))
        .collect();

    debug!(
        "Attribute filter {:?} = {:?}: kept {} of {} features",
        candidates,
        target,
        kept.len(),
        total
    );

    kept
}

/// Whether a single feature passes the filter
pub fn matches(feature: &Feature, candidates: &[&str], target: &str) -> bool {
    matches_normalized(feature, candidates, &normalize(target))
}

fn matches_normalized(feature: &Feature, candidates: &[&str], target: &str) -> bool {
    feature
        .first_attribute(candidates)
        .and_then(comparison_text)
        .map(|value| normalize(&value) == target)
        .unwrap_or(false)
}

fn comparison_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

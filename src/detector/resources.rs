use std::collections::BTreeSet;

use serde_json::Value;

use crate::model::{Scene, UserId};
use crate::policy::ConflictPolicy;

/// Decode a serialized id list. The host stores these as JSON blobs and
/// tolerates partially-filled records, so anything malformed degrades to
/// the empty set: bad encoding, a non-array payload, or non-numeric
/// elements inside an otherwise valid array.
fn decode_ids(raw: Option<&str>) -> BTreeSet<UserId> {
    let Some(raw) = raw else {
        return BTreeSet::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items.iter().filter_map(Value::as_i64).collect(),
        _ => BTreeSet::new(),
    }
}

/// Actor ids the scene claims. Ordered, so emitted conflicts list shared
/// ids deterministically.
pub fn actors_of(scene: &Scene) -> BTreeSet<UserId> {
    decode_ids(scene.assigned_actors.as_deref())
}

/// Crew ids the scene claims.
pub fn crew_of(scene: &Scene) -> BTreeSet<UserId> {
    decode_ids(scene.assigned_crew.as_deref())
}

/// Canonical location key: trimmed and lowercased, with internal
/// whitespace optionally folded per policy. `None` when blank — a scene
/// without a location cannot collide on one.
pub fn location_key_of(scene: &Scene, policy: &ConflictPolicy) -> Option<String> {
    let loc = scene.location.as_deref()?.trim();
    if loc.is_empty() {
        return None;
    }
    if policy.fold_location_whitespace {
        Some(loc.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
    } else {
        Some(loc.to_lowercase())
    }
}

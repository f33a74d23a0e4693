use serde::{Deserialize, Serialize};

/// Tunable detection policy. Hosts construct one per deployment; the
/// defaults match the surrounding system's behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictPolicy {
    /// Minutes a scene is assumed to occupy when it carries no duration
    /// data at all. Must be positive — a zero assumption would hide
    /// same-instant double-bookings.
    pub default_duration_min: i64,
    /// Collapse runs of internal whitespace when building location keys,
    /// so "Stage  4" and "Stage 4" compare equal.
    pub fold_location_whitespace: bool,
    /// Minutes of padding on each side of the bulk comparison window — an
    /// upper bound on how long any scene plausibly runs, so scenes
    /// scheduled just outside the requested range are still compared.
    pub comparison_pad_min: i64,
}

impl Default for ConflictPolicy {
    fn default() -> Self {
        Self {
            default_duration_min: 60,
            fold_location_whitespace: false,
            comparison_pad_min: 24 * 60,
        }
    }
}

use crate::model::ConflictKind;

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: candidate checks run.
pub const CANDIDATE_CHECKS_TOTAL: &str = "slatecheck_candidate_checks_total";

/// Histogram: candidate check latency in seconds.
pub const CANDIDATE_CHECK_DURATION_SECONDS: &str = "slatecheck_candidate_check_duration_seconds";

/// Counter: bulk conflict-map builds.
pub const BULK_BUILDS_TOTAL: &str = "slatecheck_bulk_builds_total";

/// Histogram: bulk build latency in seconds.
pub const BULK_BUILD_DURATION_SECONDS: &str = "slatecheck_bulk_build_duration_seconds";

/// Counter: conflicts emitted. Labels: kind.
pub const CONFLICTS_FOUND_TOTAL: &str = "slatecheck_conflicts_found_total";

// ── USE metrics (work volume) ───────────────────────────────────

/// Histogram: comparison-pool size per bulk build.
pub const BULK_POOL_SCENES: &str = "slatecheck_bulk_pool_scenes";

/// Map a conflict kind to a short label for metrics.
pub fn kind_label(kind: ConflictKind) -> &'static str {
    match kind {
        ConflictKind::ActorDoubleBooked => "actor",
        ConflictKind::CrewDoubleBooked => "crew",
        ConflictKind::LocationDoubleBooked => "location",
    }
}

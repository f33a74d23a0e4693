use crate::model::{MS_PER_MIN, Scene, TimeWindow};
use crate::policy::ConflictPolicy;

/// Resolve how many minutes a scene occupies its resources: explicit
/// duration first, then the expected duration, then the policy default.
/// Non-positive stored values fall through to the next source.
fn duration_min_of(scene: &Scene, policy: &ConflictPolicy) -> i64 {
    for d in [scene.duration_min, scene.expected_duration_min] {
        if let Some(d) = d
            && d > 0
        {
            return d;
        }
    }
    policy.default_duration_min
}

/// The window a scene occupies, or `None` when it has no scheduled time.
///
/// Stored timestamps and durations are untrusted host data, so the
/// arithmetic saturates; a window that would not extend past its own start
/// (misconfigured non-positive default) yields `None`.
pub fn window_of(scene: &Scene, policy: &ConflictPolicy) -> Option<TimeWindow> {
    let start = scene.scheduled_time?;
    let end = start.saturating_add(duration_min_of(scene, policy).saturating_mul(MS_PER_MIN));
    if end <= start {
        return None;
    }
    Some(TimeWindow::new(start, end))
}

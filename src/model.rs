use serde::{Deserialize, Serialize};

/// Unix milliseconds — the only time type.
pub type Ms = i64;

pub const MS_PER_MIN: Ms = 60_000;

/// Integer identifiers, as issued by the surrounding production system.
pub type SceneId = i64;
pub type CompanyId = i64;
pub type ShowId = i64;
pub type UserId = i64;

/// Half-open interval `[start, end)` a scene occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Ms,
    pub end: Ms,
}

impl TimeWindow {
    pub fn new(start: Ms, end: Ms) -> Self {
        debug_assert!(start < end, "TimeWindow start must be before end");
        Self { start, end }
    }

    pub fn duration_ms(&self) -> Ms {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Overlapping portion of the two windows, `None` when disjoint.
    pub fn intersection(&self, other: &TimeWindow) -> Option<TimeWindow> {
        if !self.overlaps(other) {
            return None;
        }
        Some(TimeWindow::new(
            self.start.max(other.start),
            self.end.min(other.end),
        ))
    }

    /// Window widened by `pad` on both sides, saturating at the i64 range.
    pub fn padded(&self, pad: Ms) -> TimeWindow {
        TimeWindow {
            start: self.start.saturating_sub(pad),
            end: self.end.saturating_add(pad),
        }
    }
}

/// A scheduled production event claiming people and a place.
///
/// Read-only input to the detector: records arrive from the scene store and
/// are never mutated here. `id` is `None` for a candidate that has not been
/// persisted yet. `assigned_actors`/`assigned_crew` are serialized id lists
/// as stored by the host system; malformed payloads decode to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: Option<SceneId>,
    pub company_id: CompanyId,
    pub show_id: Option<ShowId>,
    pub scheduled_time: Option<Ms>,
    pub duration_min: Option<i64>,
    pub expected_duration_min: Option<i64>,
    pub assigned_actors: Option<String>,
    pub assigned_crew: Option<String>,
    pub location: Option<String>,
    pub title: Option<String>,
    pub scene_number: Option<String>,
}

/// What kind of double-booking a conflict represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    ActorDoubleBooked,
    CrewDoubleBooked,
    LocationDoubleBooked,
}

/// One detected collision against one other scene.
///
/// A pair of scenes can produce several of these (actor and location at
/// once, say) — kinds stay distinct because callers present different
/// remediation hints per kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub other_scene_id: Option<SceneId>,
    pub other_title: Option<String>,
    pub other_scene_number: Option<String>,
    pub other_show_id: Option<ShowId>,
    /// Shared user ids for actor/crew conflicts, sorted; empty for location.
    pub resource_ids: Vec<UserId>,
    /// Intersection of the two scenes' windows, for display.
    pub overlap: TimeWindow,
}

/// Result of the interactive pre-save check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictCheck {
    pub has_conflicts: bool,
    pub conflicts: Vec<Conflict>,
}

impl ConflictCheck {
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        Self {
            has_conflicts: !conflicts.is_empty(),
            conflicts,
        }
    }

    /// Narrow the result to conflicts against one production. Resource
    /// conflicts are still detected across shows; this only filters what a
    /// single-show view presents.
    pub fn for_show(self, show_id: ShowId) -> ConflictCheck {
        let conflicts: Vec<Conflict> = self
            .conflicts
            .into_iter()
            .filter(|c| c.other_show_id == Some(show_id))
            .collect();
        ConflictCheck::from_conflicts(conflicts)
    }
}

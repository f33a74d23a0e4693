use crate::model::{Conflict, ConflictKind, Scene, TimeWindow, UserId};
use crate::policy::ConflictPolicy;

use super::resources::{actors_of, crew_of, location_key_of};
use super::window::window_of;

/// All conflicts between two scenes, in kind order: actors, crew, location.
///
/// Empty unless the scenes are distinct, share a company, and both occupy
/// windows that overlap. A pair sharing an actor and a location emits two
/// records, one per kind. Symmetric up to which scene the records describe:
/// `evaluate_pair(a, b)` and `evaluate_pair(b, a)` carry the same kinds,
/// shared ids, and overlap window.
pub fn evaluate_pair(a: &Scene, b: &Scene, policy: &ConflictPolicy) -> Vec<Conflict> {
    // A scene never conflicts with itself. Two unsaved candidates (both
    // id-less) are still comparable, so only equal persisted ids reject.
    if a.id.is_some() && a.id == b.id {
        return Vec::new();
    }
    // Tenant scoping is the caller's contract; a mixed pool is skipped
    // here rather than surfaced as an error.
    if a.company_id != b.company_id {
        return Vec::new();
    }
    let (Some(wa), Some(wb)) = (window_of(a, policy), window_of(b, policy)) else {
        return Vec::new();
    };
    let Some(overlap) = wa.intersection(&wb) else {
        return Vec::new();
    };

    let mut conflicts = Vec::new();

    let shared_actors: Vec<UserId> = actors_of(a).intersection(&actors_of(b)).copied().collect();
    if !shared_actors.is_empty() {
        conflicts.push(conflict_with(ConflictKind::ActorDoubleBooked, b, shared_actors, overlap));
    }

    let shared_crew: Vec<UserId> = crew_of(a).intersection(&crew_of(b)).copied().collect();
    if !shared_crew.is_empty() {
        conflicts.push(conflict_with(ConflictKind::CrewDoubleBooked, b, shared_crew, overlap));
    }

    if let (Some(loc_a), Some(loc_b)) = (location_key_of(a, policy), location_key_of(b, policy))
        && loc_a == loc_b
    {
        conflicts.push(conflict_with(ConflictKind::LocationDoubleBooked, b, Vec::new(), overlap));
    }

    conflicts
}

fn conflict_with(
    kind: ConflictKind,
    other: &Scene,
    resource_ids: Vec<UserId>,
    overlap: TimeWindow,
) -> Conflict {
    Conflict {
        kind,
        other_scene_id: other.id,
        other_title: other.title.clone(),
        other_scene_number: other.scene_number.clone(),
        other_show_id: other.show_id,
        resource_ids,
        overlap,
    }
}

use std::sync::Arc;

use slatecheck::{
    ConflictDetector, ConflictKind, ConflictPolicy, InMemorySceneStore, Ms, Scene, SceneId,
    SceneStore, TimeWindow,
};

const H: Ms = 3_600_000;
const M: Ms = 60_000;

/// 2025-03-01 00:00:00 UTC.
const MAR1: Ms = 1_740_787_200_000;

fn scene(id: SceneId, start: Ms, dur_min: i64) -> Scene {
    Scene {
        id: Some(id),
        company_id: 1,
        scheduled_time: Some(start),
        duration_min: Some(dur_min),
        ..Scene::default()
    }
}

fn setup() -> (ConflictDetector, Arc<InMemorySceneStore>) {
    let store = Arc::new(InMemorySceneStore::new());
    let detector = ConflictDetector::new(store.clone(), ConflictPolicy::default());
    (detector, store)
}

#[tokio::test]
async fn validate_before_save_then_render_calendar() {
    let (detector, store) = setup();

    // The March schedule as the host would persist it.
    store.insert(Scene {
        assigned_actors: Some("[7]".into()),
        location: Some("Stage 4".into()),
        title: Some("Opening crawl".into()),
        scene_number: Some("1".into()),
        show_id: Some(3),
        ..scene(10, MAR1 + 14 * H, 60)
    });
    store.insert(Scene {
        assigned_actors: Some("[8]".into()),
        ..scene(11, MAR1 + 16 * H, 60)
    });

    // Interactive check: an unsaved scene claiming actor 7 at 14:30.
    let candidate = Scene {
        id: None,
        company_id: 1,
        scheduled_time: Some(MAR1 + 14 * H + 30 * M),
        duration_min: Some(60),
        assigned_actors: Some("[7, 8]".into()),
        ..Scene::default()
    };
    let pool = store
        .scenes_in_window(1, TimeWindow::new(MAR1, MAR1 + 31 * 24 * H))
        .await
        .unwrap();
    let check = detector.check_candidate(&candidate, &pool);

    assert!(check.has_conflicts);
    assert_eq!(check.conflicts.len(), 1);
    let conflict = &check.conflicts[0];
    assert_eq!(conflict.kind, ConflictKind::ActorDoubleBooked);
    assert_eq!(conflict.other_scene_id, Some(10));
    assert_eq!(conflict.other_title.as_deref(), Some("Opening crawl"));
    assert_eq!(conflict.resource_ids, vec![7]);
    assert_eq!(
        conflict.overlap,
        TimeWindow::new(MAR1 + 14 * H + 30 * M, MAR1 + 15 * H)
    );

    // The user saves anyway; the calendar then renders badges in one pass.
    store.insert(Scene {
        id: Some(12),
        assigned_actors: Some("[7, 8]".into()),
        ..candidate
    });
    let map = detector.build_conflict_map(1, &[10, 11, 12]).await.unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map[&10].len(), 1);
    assert_eq!(map[&10][0].other_scene_id, Some(12));
    assert_eq!(map[&12].len(), 1);
    assert_eq!(map[&12][0].other_scene_id, Some(10));
    assert!(!map.contains_key(&11));
}

#[tokio::test]
async fn month_boundary_conflict_is_not_missed() {
    let (detector, store) = setup();

    // Visible month: March. An overnight shoot from Feb 28 23:30 runs 90
    // minutes into March 1 and shares a location with the first March scene.
    store.insert(Scene {
        location: Some("Backlot".into()),
        ..scene(200, MAR1 - 30 * M, 90)
    });
    store.insert(Scene {
        location: Some("backlot".into()),
        ..scene(201, MAR1 + 30 * M, 60)
    });

    // The calendar only asks about March ids.
    let map = detector.build_conflict_map(1, &[201]).await.unwrap();
    let conflicts = map.get(&201).expect("February scene must be compared");
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].kind, ConflictKind::LocationDoubleBooked);
    assert_eq!(conflicts[0].other_scene_id, Some(200));
    assert_eq!(
        conflicts[0].overlap,
        TimeWindow::new(MAR1 + 30 * M, MAR1 + H)
    );
}

#[tokio::test]
async fn companies_never_see_each_other() {
    let (detector, store) = setup();

    store.insert(Scene {
        assigned_actors: Some("[7]".into()),
        ..scene(10, MAR1 + 14 * H, 60)
    });
    // Same actor id, same slot, different tenant.
    store.insert(Scene {
        id: Some(20),
        company_id: 2,
        scheduled_time: Some(MAR1 + 14 * H),
        duration_min: Some(60),
        assigned_actors: Some("[7]".into()),
        ..Scene::default()
    });

    let map = detector.build_conflict_map(1, &[10]).await.unwrap();
    assert!(map.is_empty());
    let map = detector.build_conflict_map(2, &[20]).await.unwrap();
    assert!(map.is_empty());
}

#[tokio::test]
async fn show_filter_narrows_a_check() {
    let (detector, store) = setup();

    store.insert(Scene {
        assigned_actors: Some("[7]".into()),
        show_id: Some(3),
        ..scene(10, MAR1 + 14 * H, 60)
    });
    store.insert(Scene {
        assigned_actors: Some("[7]".into()),
        show_id: Some(4),
        ..scene(11, MAR1 + 14 * H, 60)
    });

    let candidate = Scene {
        id: None,
        company_id: 1,
        scheduled_time: Some(MAR1 + 14 * H),
        duration_min: Some(30),
        assigned_actors: Some("[7]".into()),
        ..Scene::default()
    };
    let pool = store
        .scenes_in_window(1, TimeWindow::new(MAR1, MAR1 + 24 * H))
        .await
        .unwrap();

    let check = detector.check_candidate(&candidate, &pool);
    assert_eq!(check.conflicts.len(), 2);

    // A single-show view still flags the cross-show double-booking when it
    // asks for everything, but can narrow its presentation to one show.
    let narrowed = check.for_show(3);
    assert!(narrowed.has_conflicts);
    assert_eq!(narrowed.conflicts.len(), 1);
    assert_eq!(narrowed.conflicts[0].other_scene_id, Some(10));
}

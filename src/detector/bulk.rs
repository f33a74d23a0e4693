use std::collections::HashMap;
use std::time::Instant;

use crate::model::{CompanyId, Conflict, MS_PER_MIN, Scene, SceneId, TimeWindow};
use crate::observability;
use crate::store::StoreError;

use super::ConflictDetector;
use super::pairwise::evaluate_pair;
use super::window::window_of;

impl ConflictDetector {
    /// Conflict lists for every requested scene, keyed by scene id, so a
    /// calendar view renders all its badges from one pass. Scenes with no
    /// conflicts are absent from the map.
    ///
    /// Only the requested scenes are fetched by id, but the comparison
    /// pool covers the padded envelope of their schedules: a scene in the
    /// visible month can collide with one just outside it, and comparing
    /// against `scene_ids` alone would miss that at the range boundary.
    pub async fn build_conflict_map(
        &self,
        company_id: CompanyId,
        scene_ids: &[SceneId],
    ) -> Result<HashMap<SceneId, Vec<Conflict>>, StoreError> {
        if scene_ids.is_empty() {
            return Ok(HashMap::new());
        }
        let started = Instant::now();

        let targets = self.store.scenes_by_ids(company_id, scene_ids).await?;
        let Some(envelope) = self.envelope_of(&targets) else {
            // Nothing in the request is scheduled.
            return Ok(HashMap::new());
        };
        let pool = self.store.scenes_in_window(company_id, envelope).await?;

        let mut map: HashMap<SceneId, Vec<Conflict>> = HashMap::new();
        for scene in &targets {
            let Some(id) = scene.id else { continue };
            let conflicts: Vec<Conflict> = pool
                .iter()
                .flat_map(|other| evaluate_pair(scene, other, &self.policy))
                .collect();
            if !conflicts.is_empty() {
                for c in &conflicts {
                    metrics::counter!(
                        observability::CONFLICTS_FOUND_TOTAL,
                        "kind" => observability::kind_label(c.kind)
                    )
                    .increment(1);
                }
                map.insert(id, conflicts);
            }
        }

        metrics::counter!(observability::BULK_BUILDS_TOTAL).increment(1);
        metrics::histogram!(observability::BULK_POOL_SCENES).record(pool.len() as f64);
        metrics::histogram!(observability::BULK_BUILD_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());
        tracing::debug!(
            requested = scene_ids.len(),
            pool = pool.len(),
            conflicted = map.len(),
            "bulk conflict map"
        );

        Ok(map)
    }

    /// Smallest window covering every scheduled target, widened by the
    /// policy pad on both sides. `None` when no target is scheduled.
    fn envelope_of(&self, targets: &[Scene]) -> Option<TimeWindow> {
        let mut bounds: Option<(i64, i64)> = None;
        for scene in targets {
            if let Some(w) = window_of(scene, &self.policy) {
                bounds = Some(match bounds {
                    None => (w.start, w.end),
                    Some((start, end)) => (start.min(w.start), end.max(w.end)),
                });
            }
        }
        let (start, end) = bounds?;
        let pad = self.policy.comparison_pad_min.max(0).saturating_mul(MS_PER_MIN);
        Some(TimeWindow::new(start, end).padded(pad))
    }
}

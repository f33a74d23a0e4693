use std::collections::BTreeMap;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::model::{CompanyId, Scene, SceneId, TimeWindow};

#[derive(Debug)]
pub enum StoreError {
    /// The backing store could not serve the read.
    Backend(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Backend(e) => write!(f, "scene store error: {e}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Read contract the detector needs from the surrounding system. Scenes are
/// already authorized and tenant-scoped by the caller's store; the detector
/// never widens a query past the given company.
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Scenes of `company_id` whose id is in `ids`. Unknown ids are simply
    /// absent from the result.
    async fn scenes_by_ids(
        &self,
        company_id: CompanyId,
        ids: &[SceneId],
    ) -> Result<Vec<Scene>, StoreError>;

    /// Scenes of `company_id` scheduled inside `[window.start, window.end)`.
    /// Unscheduled scenes are never returned — they cannot conflict.
    async fn scenes_in_window(
        &self,
        company_id: CompanyId,
        window: TimeWindow,
    ) -> Result<Vec<Scene>, StoreError>;
}

/// Reference store keeping scenes in memory, keyed company → scene id.
/// Backs the integration tests and the stress bench, and works as-is for
/// hosts that hold the schedule in memory.
pub struct InMemorySceneStore {
    scenes: DashMap<CompanyId, BTreeMap<SceneId, Scene>>,
}

impl Default for InMemorySceneStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySceneStore {
    pub fn new() -> Self {
        Self {
            scenes: DashMap::new(),
        }
    }

    /// Store a scene under its id. Returns the id it was stored under, or
    /// `None` for an unsaved scene (id-less candidates are not persisted).
    pub fn insert(&self, scene: Scene) -> Option<SceneId> {
        let id = scene.id?;
        self.scenes
            .entry(scene.company_id)
            .or_default()
            .insert(id, scene);
        Some(id)
    }

    pub fn remove(&self, company_id: CompanyId, scene_id: SceneId) -> Option<Scene> {
        self.scenes.get_mut(&company_id)?.remove(&scene_id)
    }

    pub fn scene_count(&self, company_id: CompanyId) -> usize {
        self.scenes.get(&company_id).map_or(0, |m| m.len())
    }
}

#[async_trait]
impl SceneStore for InMemorySceneStore {
    async fn scenes_by_ids(
        &self,
        company_id: CompanyId,
        ids: &[SceneId],
    ) -> Result<Vec<Scene>, StoreError> {
        let Some(company) = self.scenes.get(&company_id) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| company.get(id).cloned())
            .collect())
    }

    async fn scenes_in_window(
        &self,
        company_id: CompanyId,
        window: TimeWindow,
    ) -> Result<Vec<Scene>, StoreError> {
        let Some(company) = self.scenes.get(&company_id) else {
            return Ok(Vec::new());
        };
        Ok(company
            .values()
            .filter(|s| {
                s.scheduled_time
                    .is_some_and(|t| window.start <= t && t < window.end)
            })
            .cloned()
            .collect())
    }
}

mod bulk;
mod check;
mod pairwise;
mod resources;
mod window;

pub use pairwise::evaluate_pair;
pub use resources::{actors_of, crew_of, location_key_of};
pub use window::window_of;

use std::sync::Arc;

use crate::policy::ConflictPolicy;
use crate::store::SceneStore;

/// Detects scheduling collisions between scenes: same actor, crew member,
/// or location claimed during overlapping time windows, within one company.
///
/// Stateless — every call is a pure function of its inputs plus whatever
/// the store returns, so a single detector can be shared across requests.
pub struct ConflictDetector {
    pub(crate) store: Arc<dyn SceneStore>,
    pub(crate) policy: ConflictPolicy,
}

impl ConflictDetector {
    pub fn new(store: Arc<dyn SceneStore>, policy: ConflictPolicy) -> Self {
        Self { store, policy }
    }

    pub fn policy(&self) -> &ConflictPolicy {
        &self.policy
    }
}

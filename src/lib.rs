//! Scene scheduling conflict detection: given time-boxed production events
//! that claim actors, crew, and a location, find which ones collide.

pub mod detector;
pub mod model;
pub mod observability;
pub mod policy;
pub mod store;

pub use detector::{ConflictDetector, actors_of, crew_of, evaluate_pair, location_key_of, window_of};
pub use model::{
    CompanyId, Conflict, ConflictCheck, ConflictKind, Ms, Scene, SceneId, ShowId, TimeWindow,
    UserId,
};
pub use policy::ConflictPolicy;
pub use store::{InMemorySceneStore, SceneStore, StoreError};

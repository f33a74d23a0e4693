use std::time::Instant;

use crate::model::{Conflict, ConflictCheck, Scene};
use crate::observability;

use super::ConflictDetector;
use super::pairwise::evaluate_pair;

impl ConflictDetector {
    /// Interactive pre-save check: the candidate against every other scene
    /// the caller has in scope.
    ///
    /// The pool is supplied pre-scoped by the caller (same company,
    /// scheduled scenes); entries that violate that are skipped by the
    /// evaluator's guards. Pure compute, no store access — a candidate
    /// with no scheduled time always comes back conflict-free. Output
    /// preserves pool order.
    pub fn check_candidate(&self, candidate: &Scene, pool: &[Scene]) -> ConflictCheck {
        let started = Instant::now();
        let conflicts: Vec<Conflict> = pool
            .iter()
            .flat_map(|other| evaluate_pair(candidate, other, &self.policy))
            .collect();

        metrics::counter!(observability::CANDIDATE_CHECKS_TOTAL).increment(1);
        metrics::histogram!(observability::CANDIDATE_CHECK_DURATION_SECONDS)
            .record(started.elapsed().as_secs_f64());
        for c in &conflicts {
            metrics::counter!(
                observability::CONFLICTS_FOUND_TOTAL,
                "kind" => observability::kind_label(c.kind)
            )
            .increment(1);
        }
        tracing::debug!(
            pool = pool.len(),
            conflicts = conflicts.len(),
            "candidate check"
        );

        ConflictCheck::from_conflicts(conflicts)
    }
}

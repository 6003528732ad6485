//! Clause-database reduction --- forgetting low-value learnt clauses.
//!
//! Reduction scores each learnt clause by the summed activity of its atoms over its length squared, then deactivates every clause scoring below a threshold interpolated between the observed minimum and maximum by the configured forgetfulness.
//! Deactivation is a status flip; the actual unlinking from watch lists happens lazily inside the [propagation kernel](crate::db::clause::ClauseStore::update).
//!
//! A clause justifying an atom currently on the trail is exempt, whatever its score: a reason must stay dereferenceable and active for conflict analysis.

use crate::context::Context;

impl Context {
    /// Deactivates learnt clauses scoring below the forgetfulness threshold.
    pub fn forget(&mut self) {
        self.clause_db
            .reduce(self.config.forgetfulness, &self.activity, &self.trail);
    }
}

//! Unit propagation.
//!
//! # Overview
//!
//! Each assigned atom past the propagation pointer falsifies one literal, and every clause watching that literal may be affected: satisfied by its other watch, rewatched elsewhere, forced to assert its other watch, or found in conflict.
//! The scan of those clauses is the [update](crate::db::clause::ClauseStore::update) kernel of the clause store; [propagate](crate::context::Context::propagate) drives the kernel over the pending suffix of the trail until a fixpoint or a conflict.
//!
//! Forced assertions land on the trail behind the pointer, so a single pass covers all consequences --- there is no separate queue of pending implications.
//!
//! A propagation pass is atomic: there is no cancellation point inside the loop, so the trail and watch index are always mutually consistent when the pass returns.

use crate::{
    context::Context,
    db::ClauseIdx,
    misc::log::targets,
    structures::literal::Literal,
};

impl Context {
    /// Propagates pending trail atoms until a fixpoint or a conflict, returning the conflicting clause if there is one.
    pub fn propagate(&mut self) -> Option<ClauseIdx> {
        while self.trail.propagated < self.trail.assigned_count() {
            let atom = self.trail.assigned()[self.trail.propagated];
            let falsified = Literal::new(atom, self.trail.cached_value(atom)).negate();
            log::trace!(target: targets::PROPAGATION, "Propagate {}", falsified.negate());

            let conflict = self.clause_db.update(falsified, &mut self.trail);

            self.trail.propagated += 1;
            self.counters.total_propagations += 1;

            if self.config.checks.watches {
                self.clause_db.check_watches();
            }

            if conflict.is_some() {
                return conflict;
            }
        }
        None
    }
}

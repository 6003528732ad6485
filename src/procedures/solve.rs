//! The search loop and its restart driver.
//!
//! # Overview
//!
//! [generate](crate::context::Context::generate) is the decide/propagate/conflict loop:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |
//!   |       +---------------+
//!   |               ⌃
//!   |               | no conflict, unassigned atoms remain
//!   |               |
//!   |               |           +-----> Satisfiable, if the valuation is complete
//!   ⌄       +-----------+       |
//! --+------>| propagate |-------+
//!   ⌃       +-----------+       |
//!   |               |           +-----> Unsatisfiable, on a conflict at the root level
//!   |               | conflict above the root
//!   |               ⌄
//!   |  +---------------------------+
//!   +--| analyze, backjump, store  |
//!      +---------------------------+
//! ```
//!
//! A conflict budget may bound the loop, in which case exhaustion is the inconclusive [Unknown](Report::Unknown) --- not a failure, but the signal consumed by the restart driver to retry with a larger budget.
//!
//! [solve](crate::context::Context::solve) wraps generate in geometric restarts: on an inconclusive run the search returns to the root level, the budget grows by a constant factor, the clause database is [reduced](crate::procedures::reduction), and the loop resumes.
//! The outcome is independent of the schedule; only Satisfiable or Unsatisfiable ends the loop.

use crate::{context::{Context, ContextState}, misc::log::targets, reports::Report};

impl Context {
    /// The core CDCL loop, bounded by a total-conflict budget if one is given.
    pub fn generate(&mut self, conflict_limit: Option<usize>) -> Report {
        loop {
            if let Some(limit) = conflict_limit {
                if self.counters.total_conflicts >= limit {
                    return Report::Unknown;
                }
            }

            match self.propagate() {
                None => {
                    if self.config.checks.propagation {
                        self.check_propagation();
                    }

                    if self.trail.unassigned_count() == 0 {
                        self.state = ContextState::Satisfiable;
                        if self.config.checks.solution {
                            self.check_solution();
                        }
                        return Report::Satisfiable;
                    }

                    self.make_decision();
                }

                Some(conflict) => {
                    if self.trail.level() == 0 {
                        self.state = ContextState::Unsatisfiable;
                        return Report::Unsatisfiable;
                    }

                    let (levels, learned) = self.analyze(conflict);
                    self.backjump(levels);
                    self.store_learned(learned);
                    self.counters.total_conflicts += 1;
                }
            }
        }
    }

    /// Determines satisfiability under geometric restarts.
    pub fn solve(&mut self) -> Report {
        if self.state == ContextState::Unsatisfiable {
            return Report::Unsatisfiable;
        }
        self.state = ContextState::Solving;

        self.init_activity();

        let mut base = self.config.restart_base;
        let mut limit = base;

        loop {
            log::info!(target: targets::RESTART, "Restart with limit {limit} after {} conflicts, {}ms", self.counters.total_conflicts, self.counters.elapsed().as_millis());

            match self.generate(Some(limit)) {
                Report::Unknown => {
                    self.undo_to_root();
                    base = (base as f64 * self.config.restart_factor) as usize;
                    limit += base;
                    self.counters.restarts += 1;
                    self.forget();
                }

                outcome => return outcome,
            }
        }
    }
}

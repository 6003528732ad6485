//! Conflict analysis --- deriving an asserting clause by first-UIP resolution.
//!
//! # Overview
//!
//! Analysis is iterative, over an explicit work-list seeded with the literals of the conflicting clause and a visited-atom set --- no recursion, so stack depth is independent of the instance.
//!
//! Repeatedly, a literal is taken from the work-list and, if its atom is unvisited, the atom is marked and bumped, then:
//! - Assigned below the current level, it cannot be resolved further: its negation joins the learned clause, and the greatest such level is tracked as the backjump target.
//! - The decision of the current level (no reason), it is requeued at the front --- once everything else resolves it is the sole remaining current-level literal.
//! - Otherwise, it is replaced by the remaining literals of its justifying clause: the resolution step.
//!
//! The loop ends when exactly one current-level literal remains.
//! Its negation is the asserting literal, placed at the front of the learned clause.
//!
//! Termination is guaranteed: levels are non-negative, and every atom is visited at most once.
//!
//! # Result
//!
//! The pair of how many levels to undo --- the current level less the backjump target --- and the learned clause, asserting at slot 0.

use std::collections::{HashSet, VecDeque};

use crate::{
    context::Context,
    db::{ClauseIdx, LevelIndex},
    misc::log::targets,
    structures::{atom::Atom, clause::Clause, literal::Literal},
};

impl Context {
    /// Analyses the conflict, returning how many levels to undo and the learned clause.
    ///
    /// Every visited atom has its activity bumped, with one decay of the increment per call.
    pub fn analyze(&mut self, conflict: ClauseIdx) -> (LevelIndex, Clause) {
        let current = self.trail.level();
        log::info!(target: targets::ANALYSIS, "Analysis of clause {conflict} at level {current}");

        let mut work_list: VecDeque<Literal> =
            self.clause_db.clause(conflict).literals().collect();
        let mut visited: HashSet<Atom> = HashSet::default();
        let mut learned: Vec<Literal> = Vec::default();
        let mut max_level: LevelIndex = 0;

        while work_list.len() > 1 {
            let literal = match work_list.pop_back() {
                Some(literal) => literal,
                None => unreachable!("! Work-list emptied with no asserting literal"),
            };
            let atom = literal.atom();

            if !visited.insert(atom) {
                continue;
            }
            self.activity.bump(atom);

            let level = self.trail.level_of(atom);
            if level < current {
                if level > max_level {
                    max_level = level;
                }
                learned.push(Literal::new(atom, self.trail.cached_value(atom)).negate());
            } else {
                match self.trail.reason_of(atom) {
                    None => {
                        // The decision of the current level: left for last.
                        work_list.push_front(literal);
                    }
                    Some(reason) => {
                        for premise in self.clause_db.clause(reason).literals() {
                            if premise.atom() != atom && !visited.contains(&premise.atom()) {
                                work_list.push_back(premise);
                            }
                        }
                    }
                }
            }
        }

        let uip = match work_list.pop_back() {
            Some(literal) => literal.atom(),
            None => unreachable!("! Work-list emptied with no asserting literal"),
        };
        let asserting = Literal::new(uip, self.trail.cached_value(uip)).negate();
        learned.insert(0, asserting);
        let learned = Clause::new(learned);

        self.activity.decay();

        log::info!(target: targets::ANALYSIS, "Learned {learned}, backjump {} levels", current - max_level);
        (current - max_level, learned)
    }

    /// Stores a learned clause and immediately asserts its first literal, with the clause as its own reason.
    pub fn store_learned(&mut self, clause: Clause) {
        let asserting = clause.literal(0);
        let idx = self.clause_db.add_learnt(clause);
        self.trail.assign(asserting, Some(idx));
    }
}

//! The clause store --- owner of all clauses, their status, and the watched-literal index.
//!
//! # Overview
//!
//! Every clause, original or learnt, lives in a single arena with a parallel status array.
//! Clauses of length two or more watch the literals in their slots 0 and 1: the watch list of a literal holds the indices of the clauses watching it, and the [update](ClauseStore::update) kernel maintains the invariant that --- after a propagation fixpoint with no outstanding conflict --- no active clause has both watched literals false.
//!
//! Original unit clauses are stored [Inactive](ClauseStatus::Inactive) and never watched; the caller asserts their literal separately.
//!
//! # Lazy removal
//!
//! Deactivating a clause flips its status to [PendingRemoval](ClauseStatus::PendingRemoval) in O(1) and nothing more.
//! The clause is unlinked from a watch list only when a scan of that list next encounters the entry, which keeps removal amortised O(1) per clause and avoids any eager compaction.

use crate::{
    db::{activity::ActivityHeap, trail::Trail, ClauseIdx},
    misc::log::targets,
    structures::{
        clause::{Clause, ClauseStatus},
        literal::Literal,
    },
};

/// The clause store and watched-literal index.
#[derive(Default)]
pub struct ClauseStore {
    /// All clauses, original and learnt.
    clauses: Vec<Clause>,

    /// The status of each clause.
    status: Vec<ClauseStatus>,

    /// The indices of active learnt clauses, for reduction.
    learnts: Vec<ClauseIdx>,

    /// The watch lists, indexed by literal.
    watchers: Vec<Vec<ClauseIdx>>,
}

impl ClauseStore {
    /// Extends the watch index to cover `n` atoms.
    pub fn grow_to(&mut self, n: usize) {
        while self.watchers.len() < 2 * n {
            self.watchers.push(Vec::default());
        }
    }

    /// The count of stored clauses, including deactivated ones.
    pub fn count(&self) -> usize {
        self.clauses.len()
    }

    /// The count of active learnt clauses.
    pub fn learnt_count(&self) -> usize {
        self.learnts.len()
    }

    pub fn clause(&self, idx: ClauseIdx) -> &Clause {
        &self.clauses[idx]
    }

    pub fn status(&self, idx: ClauseIdx) -> ClauseStatus {
        self.status[idx]
    }

    /// All stored clauses, in addition order.
    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// Stores `clause`, watching its first two literals if it has at least two.
    ///
    /// Unit clauses are stored [Inactive](ClauseStatus::Inactive) and never watched: the caller must assert their literal separately.
    pub fn add(&mut self, clause: Clause) -> ClauseIdx {
        let idx = self.clauses.len();
        match clause.len() {
            0 => panic!("! Attempt to store an empty clause"),
            1 => {
                self.clauses.push(clause);
                self.status.push(ClauseStatus::Inactive);
            }
            _ => {
                self.watchers[clause.literal(0).index()].push(idx);
                self.watchers[clause.literal(1).index()].push(idx);
                self.clauses.push(clause);
                self.status.push(ClauseStatus::Active);
            }
        }
        idx
    }

    /// Stores a learnt clause, noting it for reduction if it is watched.
    pub fn add_learnt(&mut self, clause: Clause) -> ClauseIdx {
        let watched = clause.len() > 1;
        let idx = self.add(clause);
        if watched {
            self.learnts.push(idx);
        } else {
            // A learnt unit is asserted at the root level with itself as reason, so it must stay dereferenceable.
            self.status[idx] = ClauseStatus::Active;
        }
        idx
    }

    /// Marks a clause for lazy removal.
    pub fn deactivate(&mut self, idx: ClauseIdx) {
        log::trace!(target: targets::REDUCTION, "Deactivate clause {idx}");
        self.status[idx] = ClauseStatus::PendingRemoval;
    }

    /// Unlinks the watcher at `pos` in the watch list of `literal` by swap-to-end.
    fn remove_watcher(&mut self, literal: Literal, pos: usize) {
        self.watchers[literal.index()].swap_remove(pos);
    }

    /// The propagation kernel: updates the watches of every clause watching `falsified`.
    ///
    /// The watch list is scanned in reverse, so swap-to-end removal mid-scan never skips an entry.
    /// For each active clause watching `falsified`:
    /// 1. If the other watched literal is true the clause is satisfied --- skip.
    /// 2. Otherwise search the non-watched literals for one not false, and move the watch there.
    /// 3. With no replacement the other watched literal is forced: if it is already false the clause is the conflict, otherwise it is asserted with this clause as its justification.
    ///
    /// A clause marked [PendingRemoval](ClauseStatus::PendingRemoval) is unlinked on first encounter and never dereferenced.
    pub fn update(&mut self, falsified: Literal, trail: &mut Trail) -> Option<ClauseIdx> {
        let mut pos = self.watchers[falsified.index()].len();

        while pos > 0 {
            pos -= 1;
            let idx = self.watchers[falsified.index()][pos];

            if self.status[idx] == ClauseStatus::PendingRemoval {
                self.remove_watcher(falsified, pos);
                continue;
            }

            // The falsified literal is in slot 0 or 1; the other watch is in the other slot.
            let vacated = match self.clauses[idx].literal(1).atom() == falsified.atom() {
                true => 1,
                false => 0,
            };
            let other = self.clauses[idx].literal(1 - vacated);

            if trail.value_of_literal(other) == Some(true) {
                continue;
            }

            let mut replacement = None;
            for slot in (2..self.clauses[idx].len()).rev() {
                if trail.value_of_literal(self.clauses[idx].literal(slot)) != Some(false) {
                    replacement = Some(slot);
                    break;
                }
            }

            match replacement {
                Some(slot) => {
                    let incoming = self.clauses[idx].literal(slot);
                    self.clauses[idx].swap_watch(vacated, slot);
                    self.watchers[incoming.index()].push(idx);
                    self.remove_watcher(falsified, pos);
                }

                None => match trail.value_of_literal(other) {
                    Some(false) => {
                        log::trace!(target: targets::PROPAGATION, "Conflict at clause {idx}");
                        return Some(idx);
                    }
                    _ => {
                        log::trace!(target: targets::PROPAGATION, "Clause {idx} forces {other}");
                        trail.assign(other, Some(idx));
                    }
                },
            }
        }

        None
    }

    /// Database reduction: deactivates every learnt clause scoring below a threshold interpolated between the worst and best scores by `forgetfulness`.
    ///
    /// The score of a clause is the summed activity of its atoms over its length squared, rewarding short clauses over high-activity atoms.
    /// A clause currently justifying an atom on the trail is never deactivated, whatever its score.
    pub fn reduce(&mut self, forgetfulness: f64, activity: &ActivityHeap, trail: &Trail) {
        if self.learnts.is_empty() {
            return;
        }

        let mut scores = Vec::with_capacity(self.learnts.len());
        for &idx in &self.learnts {
            scores.push(self.score(idx, activity));
        }

        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let threshold = min + forgetfulness * (max - min);

        let in_use: Vec<ClauseIdx> = trail
            .assigned()
            .iter()
            .filter_map(|&atom| trail.reason_of(atom))
            .collect();

        let before = self.learnts.len();
        for visited in (0..self.learnts.len()).rev() {
            if scores[visited] < threshold && !in_use.contains(&self.learnts[visited]) {
                let idx = self.learnts.swap_remove(visited);
                scores.swap_remove(visited);
                self.deactivate(idx);
            }
        }

        log::info!(target: targets::REDUCTION, "Reduction deactivated {} of {before} learnt clauses", before - self.learnt_count());
    }

    /// The activity-based reduction score of a clause.
    fn score(&self, idx: ClauseIdx, activity: &ActivityHeap) -> f64 {
        let clause = &self.clauses[idx];
        let sum: f64 = clause.literals().map(|l| activity.activity(l.atom())).sum();
        sum / (clause.len() * clause.len()) as f64
    }

    /// Diagnostic: every entry in a watch list is watched by the listed clause.
    ///
    /// Skips clauses pending removal, as their entries are stale by design of lazy unlinking.
    pub fn check_watches(&self) {
        for (index, list) in self.watchers.iter().enumerate() {
            for &idx in list {
                if self.status[idx] == ClauseStatus::PendingRemoval {
                    continue;
                }
                let clause = &self.clauses[idx];
                if clause.literal(0).index() != index && clause.literal(1).index() != index {
                    panic!("! Clause {idx} {clause} is listed under a literal it does not watch");
                }
            }
        }
    }
}

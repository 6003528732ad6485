//! The assignment trail --- a sparse set over atoms, together with per-atom assignment records.
//!
//! # Overview
//!
//! Assigned atoms are kept in the prefix of a dense `order` array, with a companion `position` array giving the slot of each atom.
//! Assignment swaps an atom into the first free slot, unassignment swaps the last assigned atom into the freed slot: both constant time, with the prefix always holding the assigned atoms in chronological order.
//!
//! The order supports both propagation --- the prefix `[0, propagated)` has been processed, `[propagated, len)` is pending --- and backtracking, which shrinks the prefix to a checkpoint and hands the freed range back to the engine for reinsertion into the activity heap.
//!
//! # Records
//!
//! Alongside the sparse set, dense parallel arrays record for each atom a cached truth value, the decision level of its assignment, and its reason: a justifying clause, or none for a decision.
//! The cached value is left in place on unassignment, so the previous phase of an atom is available when it is next chosen for a decision.

use crate::{
    db::{ClauseIdx, LevelIndex},
    structures::{atom::Atom, literal::Literal},
};

/// The assignment trail.
#[derive(Default)]
pub struct Trail {
    /// Dense array with assigned atoms in the prefix `[0, len)`, in assignment order.
    order: Vec<Atom>,

    /// The slot of each atom in `order`.
    position: Vec<u32>,

    /// The count of assigned atoms.
    len: usize,

    /// The prefix `[0, propagated)` of the trail has been propagated.
    pub propagated: usize,

    /// Cached truth value of each atom, meaningful while the atom is assigned and kept as the saved phase otherwise.
    value: Vec<bool>,

    /// The decision level at which each atom was assigned.
    level: Vec<LevelIndex>,

    /// The justification of each assignment, if any.
    reason: Vec<Option<ClauseIdx>>,

    /// Trail lengths at each decision, for backtracking.
    checkpoints: Vec<usize>,
}

impl Trail {
    /// Extends capacity to `n` atoms, preserving existing assignments.
    pub fn grow_to(&mut self, n: usize) {
        for atom in self.order.len()..n {
            self.order.push(atom as Atom);
            self.position.push(atom as u32);
            self.value.push(false);
            self.level.push(0);
            self.reason.push(None);
        }
    }

    /// The count of atoms known to the trail.
    pub fn capacity(&self) -> usize {
        self.order.len()
    }

    /// The count of assigned atoms.
    pub fn assigned_count(&self) -> usize {
        self.len
    }

    /// The count of atoms without a value.
    pub fn unassigned_count(&self) -> usize {
        self.order.len() - self.len
    }

    /// The assigned atoms, in assignment order.
    pub fn assigned(&self) -> &[Atom] {
        &self.order[..self.len]
    }

    /// True if `atom` is assigned, false otherwise.
    pub fn is_assigned(&self, atom: Atom) -> bool {
        (self.position[atom as usize] as usize) < self.len
    }

    /// The value of `atom` on the current (partial) valuation.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        match self.is_assigned(atom) {
            true => Some(self.value[atom as usize]),
            false => None,
        }
    }

    /// The truth of `literal` on the current (partial) valuation.
    pub fn value_of_literal(&self, literal: Literal) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|v| v == literal.polarity())
    }

    /// The last value assigned to `atom`, regardless of whether the atom is currently assigned.
    pub fn cached_value(&self, atom: Atom) -> bool {
        self.value[atom as usize]
    }

    /// The decision level at which `atom` was assigned.
    ///
    /// Meaningful only while `atom` is assigned.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.level[atom as usize]
    }

    /// The justification of the assignment of `atom`: a clause index, or none for a decision.
    ///
    /// Meaningful only while `atom` is assigned.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseIdx> {
        self.reason[atom as usize]
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.checkpoints.len() as LevelIndex
    }

    /// Asserts `literal` with the given reason at the current level.
    ///
    /// A no-op if the atom is already assigned --- in particular, asserting an already-true literal does not disturb trail membership.
    pub fn assign(&mut self, literal: Literal, reason: Option<ClauseIdx>) {
        let atom = literal.atom();
        if self.is_assigned(atom) {
            return;
        }

        self.add(atom);
        self.value[atom as usize] = literal.polarity();
        self.level[atom as usize] = self.level();
        self.reason[atom as usize] = reason;
        log::trace!(target: crate::misc::log::targets::TRAIL, "Assign {literal} (reason: {reason:?}) [{}]", self.level());
    }

    /// Marks `atom` as assigned by swapping it into the first free slot of the prefix.
    fn add(&mut self, atom: Atom) {
        let slot = self.position[atom as usize] as usize;
        if slot >= self.len {
            let displaced = self.order[self.len];
            self.order[self.len] = atom;
            self.order[slot] = displaced;
            self.position[displaced as usize] = slot as u32;
            self.position[atom as usize] = self.len as u32;
        }
        self.len += 1;
    }

    /// Unmarks `atom`, swapping the last assigned atom into its slot.
    pub fn remove(&mut self, atom: Atom) {
        let slot = self.position[atom as usize] as usize;
        if slot < self.len {
            self.len -= 1;
            let displaced = self.order[self.len];
            self.order[self.len] = atom;
            self.order[slot] = displaced;
            self.position[displaced as usize] = slot as u32;
            self.position[atom as usize] = self.len as u32;
        }
    }

    /// Checkpoints the trail, opening a new decision level.
    pub fn save(&mut self) {
        self.checkpoints.push(self.len);
    }

    /// Backtracks to the previous checkpoint, returning the freed atoms.
    ///
    /// The cached value, level, and reason of each freed atom are left in place: only membership of the assigned prefix changes.
    pub fn undo(&mut self) -> Vec<Atom> {
        match self.checkpoints.pop() {
            Some(mark) => {
                let freed = self.order[mark..self.len].to_vec();
                self.len = mark;
                self.propagated = mark;
                freed
            }
            None => Vec::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_set() {
        let mut trail = Trail::default();
        trail.grow_to(8);

        trail.assign(Literal::new(3, true), None);
        trail.assign(Literal::new(5, false), None);

        assert!(trail.is_assigned(3));
        assert!(trail.is_assigned(5));
        assert!(!trail.is_assigned(0));
        assert_eq!(trail.assigned(), &[3, 5]);
        assert_eq!(trail.value_of(3), Some(true));
        assert_eq!(trail.value_of(5), Some(false));
        assert_eq!(trail.value_of(4), None);

        trail.remove(3);
        assert!(!trail.is_assigned(3));
        assert!(trail.is_assigned(5));
        assert_eq!(trail.assigned_count(), 1);
    }

    #[test]
    fn assignment_is_idempotent() {
        let mut trail = Trail::default();
        trail.grow_to(4);

        trail.assign(Literal::new(2, true), None);
        trail.assign(Literal::new(2, true), None);

        assert_eq!(trail.assigned_count(), 1);
        assert_eq!(trail.value_of(2), Some(true));
    }

    #[test]
    fn undo_restores_previous_state() {
        let mut trail = Trail::default();
        trail.grow_to(6);

        trail.assign(Literal::new(0, true), None);
        trail.propagated = 1;

        trail.save();
        trail.assign(Literal::new(1, false), None);
        trail.assign(Literal::new(2, true), Some(7));
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.level_of(2), 1);

        let freed = trail.undo();
        assert_eq!(freed, vec![1, 2]);
        assert_eq!(trail.level(), 0);
        assert_eq!(trail.assigned(), &[0]);
        assert_eq!(trail.propagated, 1);
        assert_eq!(trail.value_of(1), None);

        // The phase of a freed atom survives unassignment.
        assert!(!trail.cached_value(1));
        assert!(trail.cached_value(2));
    }

    #[test]
    fn grow_preserves_assignments() {
        let mut trail = Trail::default();
        trail.grow_to(2);
        trail.assign(Literal::new(1, true), None);

        trail.grow_to(5);
        assert_eq!(trail.capacity(), 5);
        assert!(trail.is_assigned(1));
        assert_eq!(trail.unassigned_count(), 4);
    }
}

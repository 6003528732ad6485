//! The activity heap --- a position-tracked binary max-heap over atoms, keyed by a floating activity score.
//!
//! # Overview
//!
//! The heap backs the VSIDS-style decision heuristic: atoms touched during conflict analysis are [bumped](ActivityHeap::bump), the bump [grows](ActivityHeap::decay) after each batch, and the most active unassigned atom is popped when a decision is due.
//!
//! A companion `position` array tracks where each atom sits in the heap, so an arbitrary atom's priority can be revised in O(log n) --- something a library priority queue without decrease-key support cannot offer.
//! The backing priority array covers every atom whether or not the atom is on the heap, so popped atoms keep accumulating activity and [push](ActivityHeap::push) is a cheap reinsertion.
//!
//! # Rescaling
//!
//! Activities only grow.
//! Whenever the next bump would approach the configured bound, every priority is scaled down together with the tracked maximum, preserving the relative order of all atoms while keeping the scores finite.

use crate::{config::Config, structures::atom::Atom};

/// A floating activity score.
pub type Activity = f64;

/// A max-heap over atoms keyed by activity, with positions tracked for O(log n) priority updates.
pub struct ActivityHeap {
    /// The heap of atoms, ordered by activity.
    heap: Vec<Atom>,

    /// The slot of each atom in `heap`, if the atom is on the heap.
    position: Vec<Option<u32>>,

    /// The activity of each atom, on the heap or not.
    activity: Vec<Activity>,

    /// The amount added to an atom's activity by a bump.
    increment: Activity,

    /// The factor by which the increment grows after each bump batch.
    growth: Activity,

    /// The ceiling which triggers a rescale of all activities.
    bound: Activity,

    /// The greatest activity observed since the last rescale.
    max_observed: Activity,
}

impl ActivityHeap {
    pub fn from_config(config: &Config) -> Self {
        ActivityHeap {
            heap: Vec::default(),
            position: Vec::default(),
            activity: Vec::default(),
            increment: config.activity_increment,
            growth: config.activity_growth,
            bound: config.activity_bound,
            max_observed: 0.0,
        }
    }

    /// Extends capacity to `n` atoms, each starting with zero activity, off the heap.
    pub fn grow_to(&mut self, n: usize) {
        for _ in self.position.len()..n {
            self.position.push(None);
            self.activity.push(0.0);
        }
    }

    /// The current bump increment.
    pub fn increment(&self) -> Activity {
        self.increment
    }

    /// The activity of `atom`.
    pub fn activity(&self, atom: Atom) -> Activity {
        self.activity[atom as usize]
    }

    /// True if no atom is on the heap.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Seeds the activity of every atom and (re)builds the heap over all atoms.
    pub fn seed(&mut self, scores: Vec<Activity>) {
        self.grow_to(scores.len());
        for (atom, score) in scores.into_iter().enumerate() {
            self.activity[atom] = score;
            if score > self.max_observed {
                self.max_observed = score;
            }
        }

        self.heap.clear();
        for atom in 0..self.position.len() {
            self.heap.push(atom as Atom);
            self.position[atom] = Some(atom as u32);
        }
        for slot in (0..self.heap.len() / 2).rev() {
            self.sift_down(slot);
        }
    }

    /// Reinserts `atom` onto the heap, at its current activity.
    ///
    /// A no-op if the atom is already present.
    pub fn push(&mut self, atom: Atom) {
        if self.position[atom as usize].is_none() {
            let slot = self.heap.len();
            self.heap.push(atom);
            self.position[atom as usize] = Some(slot as u32);
            self.sift_up(slot);
        }
    }

    /// Removes and returns the atom with the highest activity, if any.
    pub fn pop_max(&mut self) -> Option<Atom> {
        let max = *self.heap.first()?;
        self.position[max as usize] = None;

        let last = self.heap.pop()?;
        if !self.heap.is_empty() {
            self.heap[0] = last;
            self.position[last as usize] = Some(0);
            self.sift_down(0);
        }
        Some(max)
    }

    /// Bumps the activity of `atom` by the current increment, re-heapifying if the atom is on the heap.
    pub fn bump(&mut self, atom: Atom) {
        let bumped = self.activity[atom as usize] + self.increment;
        self.activity[atom as usize] = bumped;
        if bumped > self.max_observed {
            self.max_observed = bumped;
        }

        if let Some(slot) = self.position[atom as usize] {
            self.sift_up(slot as usize);
        }
    }

    /// Grows the increment, rescaling every activity when the increment approaches the bound.
    ///
    /// Called once per bump batch.
    pub fn decay(&mut self) {
        self.increment *= self.growth;
        if self.bound - self.increment < self.max_observed {
            self.scale_down(self.max_observed, self.increment);
            self.max_observed = self.increment;
        }
    }

    /// Rescales every activity by `mul / div`.
    ///
    /// Order-preserving, so the heap needs no repair.
    fn scale_down(&mut self, div: Activity, mul: Activity) {
        log::trace!(target: crate::misc::log::targets::ACTIVITY, "Rescale activities by {mul:e}/{div:e}");
        for activity in self.activity.iter_mut() {
            *activity = *activity * mul / div;
        }
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) >> 1;
            if self.activity[self.heap[slot] as usize] > self.activity[self.heap[parent] as usize] {
                self.swap_slots(slot, parent);
                slot = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }

            let mut largest = slot;
            if self.activity[self.heap[left] as usize] > self.activity[self.heap[largest] as usize]
            {
                largest = left;
            }

            let right = left + 1;
            if right < self.heap.len()
                && self.activity[self.heap[right] as usize]
                    > self.activity[self.heap[largest] as usize]
            {
                largest = right;
            }

            if largest == slot {
                break;
            }
            self.swap_slots(slot, largest);
            slot = largest;
        }
    }

    fn swap_slots(&mut self, a: usize, b: usize) {
        self.position[self.heap[a] as usize] = Some(b as u32);
        self.position[self.heap[b] as usize] = Some(a as u32);
        self.heap.swap(a, b);
    }
}

//! Choosing the next atom to value.
//!
//! # Overview
//!
//! The decision heuristic is VSIDS-style: the unassigned atom with the highest activity is chosen, with activities maintained by [conflict analysis](crate::procedures::analysis).
//!
//! Popping the heap may surface atoms assigned by propagation since they were pushed.
//! These are discarded, not reinserted --- they were valid candidates when pushed but are stale now, and [backjumping](crate::procedures::backjump) returns them to the heap when they are freed.
//!
//! The chosen atom is valued with its cached phase: the value it held when last assigned.
//!
//! # Randomisation
//!
//! Rather than drawing a random number on every decision, a countdown of decisions until the next substitution is drawn uniformly from `[1/(2r), 3/(2r)]` for randomness rate `r`.
//! When it reaches zero the runner-up atom is decided instead of the most active --- the top candidate goes back on the heap --- and the countdown is redrawn.

use rand::Rng;

use crate::{context::Context, structures::{atom::Atom, literal::Literal}};

impl Context {
    /// Checkpoints the trail and asserts the chosen atom at its cached phase, with no reason.
    pub fn make_decision(&mut self) {
        self.trail.save();

        let atom = self.most_active_atom_rand();
        let literal = Literal::new(atom, self.trail.cached_value(atom));
        self.trail.assign(literal, None);

        self.counters.total_decisions += 1;
    }

    /// The unassigned atom with the highest activity.
    ///
    /// Stale heap entries --- atoms assigned since they were pushed --- are discarded along the way.
    fn most_active_atom(&mut self) -> Atom {
        loop {
            match self.activity.pop_max() {
                Some(atom) if self.trail.is_assigned(atom) => continue,
                Some(atom) => return atom,
                None => panic!("! Decision requested with no unassigned atom on the heap"),
            }
        }
    }

    /// The most active unassigned atom, except when the substitution countdown fires: then the runner-up, with the top candidate pushed back.
    fn most_active_atom_rand(&mut self) -> Atom {
        let top = self.most_active_atom();
        if self.config.randomness == 0.0 {
            return top;
        }

        self.rand_counter = self.rand_counter.saturating_sub(1);
        if self.rand_counter > 0 || self.trail.unassigned_count() == 1 {
            return top;
        }

        let runner_up = self.most_active_atom();
        self.activity.push(top);

        let (min, max) = self.rand_draw;
        self.rand_counter = self.rng.random_range(min..=max);

        runner_up
    }

    /// Seeds atom activities from the formula: each occurrence of an atom contributes the increment over the clause length.
    pub fn init_activity(&mut self) {
        let mut scores = vec![0.0; self.atom_count()];
        for clause in self.clause_db.clauses() {
            for literal in clause.literals() {
                scores[literal.atom() as usize] += self.activity.increment() / clause.len() as f64;
            }
        }
        self.activity.seed(scores);
    }
}

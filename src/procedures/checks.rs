//! Internal consistency diagnostics, gated by [config switches](crate::config::Checks).
//!
//! A failed check is a broken programming invariant, not a runtime error: each aborts with a diagnostic message.

use crate::{context::Context, structures::clause::ClauseStatus};

impl Context {
    /// Every clause has a true literal and every atom a value.
    ///
    /// Sound to call only after a Satisfiable outcome.
    /// Deactivated clauses are included: every stored clause is implied by the original formula, so a genuine model satisfies them all.
    pub fn check_solution(&self) {
        for clause in self.clause_db.clauses() {
            if !clause
                .literals()
                .any(|l| self.trail.value_of_literal(l) == Some(true))
            {
                panic!("! Solution does not satisfy {clause}");
            }
        }

        for atom in 0..self.atom_count() {
            if self.trail.value_of(atom as u32).is_none() {
                panic!("! Solution leaves atom {} unassigned", atom + 1);
            }
        }
    }

    /// No active clause is unit or falsified on the current valuation.
    ///
    /// Sound to call only at a propagation fixpoint with no outstanding conflict.
    pub fn check_propagation(&self) {
        for (idx, clause) in self.clause_db.clauses().enumerate() {
            if self.clause_db.status(idx) != ClauseStatus::Active || clause.len() < 2 {
                continue;
            }

            let mut unassigned = None;
            let mut settled = false;
            for literal in clause.literals() {
                match self.trail.value_of_literal(literal) {
                    Some(true) => {
                        settled = true;
                        break;
                    }
                    None => match unassigned {
                        None => unassigned = Some(literal),
                        Some(_) => {
                            settled = true;
                            break;
                        }
                    },
                    Some(false) => {}
                }
            }

            if !settled {
                match unassigned {
                    Some(literal) => {
                        panic!("! Clause {idx} {clause} should have propagated {literal}")
                    }
                    None => panic!("! Clause {idx} {clause} is falsified with no conflict noted"),
                }
            }
        }
    }
}

//! Building a formula in a context, programmatically or from a DIMACS source.

mod dimacs;

use crate::{
    context::{Context, ContextState},
    structures::{
        atom::ATOM_MAX,
        clause::Clause,
        literal::Literal,
    },
    types::err::{self, ErrorKind},
};

impl Context {
    /// Extends the context to `n` atoms, preserving existing clauses and assignments.
    pub fn grow_to(&mut self, n: usize) {
        self.trail.grow_to(n);
        self.clause_db.grow_to(n);
        self.activity.grow_to(n);
    }

    /// Adds a clause to the context, growing to cover its atoms.
    ///
    /// A unit clause is recorded inactive and its literal asserted at the root level.
    /// A unit contradicting the root-level valuation settles the formula as unsatisfiable, returned as an error.
    pub fn add_clause(&mut self, literals: Vec<Literal>) -> Result<(), ErrorKind> {
        if literals.is_empty() {
            return Err(ErrorKind::from(err::BuildError::EmptyClause));
        }

        if let Some(greatest) = literals.iter().map(|l| l.atom()).max() {
            if greatest > ATOM_MAX {
                return Err(ErrorKind::from(err::BuildError::AtomsExhausted));
            }
            if greatest as usize >= self.atom_count() {
                self.grow_to(greatest as usize + 1);
            }
        }

        match literals.as_slice() {
            [unit] => {
                let unit = *unit;
                if self.trail.value_of_literal(unit) == Some(false) {
                    self.state = ContextState::Unsatisfiable;
                    return Err(ErrorKind::from(err::BuildError::Unsatisfiable));
                }
                self.clause_db.add(Clause::new(literals));
                self.trail.assign(unit, None);
            }
            _ => {
                self.clause_db.add(Clause::new(literals));
            }
        }

        Ok(())
    }
}

//! (The internal representation of) a clause: an owned, ordered sequence of literals.
//!
//! Clauses of length two or more keep their watched literals in slots 0 and 1, with the [propagation kernel](crate::db::clause) swapping literals in place as watches move.
//! As each clause is exclusively owned by the clause store, in-place mutation needs no aliasing discipline.

use crate::structures::literal::Literal;

/// A clause, with watched literals (if any) in slots 0 and 1.
#[derive(Clone, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

/// The status of a stored clause.
///
/// Destruction of a clause is logical only: a flip to [PendingRemoval](ClauseStatus::PendingRemoval) followed by lazy unlinking from watch lists.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseStatus {
    /// The clause is watched (or is a learnt unit asserted at the root level).
    Active,

    /// An original unit clause, never watched.
    Inactive,

    /// A learnt clause slated for lazy unlinking from its watch lists.
    PendingRemoval,
}

impl Clause {
    pub fn new(literals: Vec<Literal>) -> Self {
        Clause { literals }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The literal at `slot`.
    pub fn literal(&self, slot: usize) -> Literal {
        self.literals[slot]
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.literals.iter().copied()
    }

    /// Moves the watch in `watch_slot` (0 or 1) to the literal at `slot`, placing the old watch at `slot`.
    pub fn swap_watch(&mut self, watch_slot: usize, slot: usize) {
        self.literals.swap(watch_slot, slot);
    }

    /// The clause in the DIMACS format, without the terminating zero.
    pub fn as_dimacs(&self) -> String {
        self.literals
            .iter()
            .map(|l| l.as_dimacs().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", self.as_dimacs())
    }
}

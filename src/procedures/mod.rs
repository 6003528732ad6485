//! Procedures of the conflict-driven clause-learning algorithm, as context methods.
//!
//! - [bcp] --- unit propagation to a fixpoint or a conflict.
//! - [decision] --- activity-driven decisions, with occasional second-best substitution.
//! - [analysis] --- first-UIP conflict analysis.
//! - [backjump] --- undoing decision levels, refilling the activity heap.
//! - [reduction] --- discarding low-value learnt clauses.
//! - [solve] --- the search loop and its geometric restart driver.
//! - [checks] --- optional internal consistency diagnostics.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod checks;
pub mod decision;
pub mod reduction;
pub mod solve;

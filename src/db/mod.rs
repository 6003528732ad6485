//! The databases of a solve: the assignment trail, the clause store, and the activity heap.
//!
//! Each database exclusively owns its state, with the [context](crate::context) as the sole coordinator:
//! - The [trail](trail) owns all assignment state.
//! - The [clause store](clause) owns all clause bodies and the watch index.
//! - The [activity heap](activity) owns atom priorities and the heap over them.

pub mod activity;
pub mod clause;
pub mod trail;

/// The index of a decision level, with zero the level at which no decision has been made.
pub type LevelIndex = u32;

/// The index of a clause in the clause store.
///
/// Clauses are created at load time or at conflict-learning time and never physically removed, so an index is stable for the lifetime of the store.
pub type ClauseIdx = usize;

//! Counts for various things which count.

use std::time::{Duration, Instant};

/// Counters over a solve, read on demand.
pub struct Counters {
    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of every conflict seen.
    pub total_conflicts: usize,

    /// A count of every propagated trail atom.
    pub total_propagations: usize,

    /// The number of restarts.
    pub restarts: usize,

    /// When the context was created, for elapsed-time reads.
    start: Instant,
}

impl Counters {
    /// The time elapsed since the context was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_decisions: 0,
            total_conflicts: 0,
            total_propagations: 0,
            restarts: 0,
            start: Instant::now(),
        }
    }
}

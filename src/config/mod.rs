//! Configuration of a context.
//!
//! All configuration is supplied at construction via [Config], with defaults tuned for quick, deterministic results on small instances.
//! Diagnostic [checks](Checks) are off by default, except the (cheap, once-per-solve) solution check.

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// How eagerly database reduction discards learnt clauses, in `[0, 1]`.
    ///
    /// - 0: forget nothing.
    /// - 1: forget every clause not currently justifying an assignment.
    /// - 0.5: forget every clause scoring below the midpoint of the observed scores.
    pub forgetfulness: f64,

    /// The rate of second-best decision substitution, in `[0, 1]`.
    ///
    /// Roughly every `1/randomness` decisions the runner-up atom is chosen instead of the most active.
    /// Zero disables substitution, making the search deterministic.
    pub randomness: f64,

    /// The seed for the decision RNG.
    pub seed: u64,

    /// The conflict budget of the first restart.
    pub restart_base: usize,

    /// The geometric growth factor of the restart budget.
    pub restart_factor: f64,

    /// The initial activity bump.
    pub activity_increment: f64,

    /// The factor by which the bump grows after each conflict.
    pub activity_growth: f64,

    /// The activity ceiling which triggers rescaling.
    pub activity_bound: f64,

    /// Which internal consistency checks to run.
    pub checks: Checks,
}

/// Switches for internal consistency checks.
///
/// A violation of any check is a broken programming invariant, and aborts with a diagnostic.
#[derive(Clone, Copy, Default)]
pub struct Checks {
    /// After a satisfiable outcome, check every clause has a true literal and every atom a value.
    pub solution: bool,

    /// After every propagation fixpoint, check no active clause is unit or falsified.
    pub propagation: bool,

    /// After every propagation pass, check watch lists against clause watch slots.
    pub watches: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            forgetfulness: 0.6,
            randomness: 0.05,
            seed: 12345,

            restart_base: 100,
            restart_factor: 1.2,

            activity_increment: 1e-100,
            activity_growth: 1.1,
            activity_bound: 1e300,

            checks: Checks {
                solution: true,
                propagation: false,
                watches: false,
            },
        }
    }
}

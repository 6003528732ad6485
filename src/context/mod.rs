//! The context --- to which formulas are added and within which solves take place.
//!
//! A context composes the three databases --- [trail](crate::db::trail), [clause store](crate::db::clause), and [activity heap](crate::db::activity) --- and is their sole coordinator: no database reaches into another's internals, and every interaction between them passes through a context method.
//!
//! # Example
//! ```rust
//! # use stoat_sat::context::Context;
//! # use stoat_sat::config::Config;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::literal::Literal;
//! let mut ctx = Context::from_config(Config::default());
//! ctx.grow_to(2);
//!
//! let p = Literal::new(0, true);
//! let q = Literal::new(1, true);
//!
//! assert!(ctx.add_clause(vec![p.negate(), q]).is_ok());
//! assert!(ctx.add_clause(vec![p.negate(), q.negate()]).is_ok());
//! assert!(ctx.add_clause(vec![p, q]).is_ok());
//! assert!(ctx.add_clause(vec![p, q.negate()]).is_ok());
//!
//! assert_eq!(ctx.solve(), Report::Unsatisfiable);
//! ```

mod counters;
pub use counters::Counters;

use rand::{Rng, SeedableRng};

use crate::{
    config::Config,
    db::{activity::ActivityHeap, clause::ClauseStore, trail::Trail},
    generic::pcg::Pcg32,
    reports::Report,
};

/// The state of a context.
#[derive(Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input.
    Input,

    /// A solve is underway.
    Solving,

    /// The formula is known to be satisfiable, with a complete valuation on the trail.
    Satisfiable,

    /// The formula is known to be unsatisfiable.
    Unsatisfiable,
}

/// A context, built from a config.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// The assignment trail.
    pub trail: Trail,

    /// The clause store and watch index.
    pub clause_db: ClauseStore,

    /// The activity heap backing the decision heuristic.
    pub activity: ActivityHeap,

    /// Counts of decisions, conflicts, propagations, and restarts.
    pub counters: Counters,

    /// The state of the context.
    pub state: ContextState,

    /// Comment lines of the source formula, preserved for serialization.
    pub comments: Vec<String>,

    /// The source of randomness for decisions.
    pub(crate) rng: Pcg32,

    /// Decisions until the next second-best substitution.
    pub(crate) rand_counter: u32,

    /// The range from which `rand_counter` is redrawn.
    pub(crate) rand_draw: (u32, u32),
}

impl Context {
    /// A context with the given config, its RNG seeded from the config.
    pub fn from_config(config: Config) -> Self {
        let mut rng = Pcg32::from_seed(config.seed.to_le_bytes());

        // The countdown is drawn uniformly from [1/(2r), 3/(2r)], so substitutions
        // arrive at rate r without a random draw on every decision.
        let rand_draw = match config.randomness > 0.0 {
            true => {
                let min = (1.0 / (2.0 * config.randomness)) as u32;
                let max = (3.0 / (2.0 * config.randomness)) as u32;
                (min.max(1), max.max(min.max(1)))
            }
            false => (0, 0),
        };
        let rand_counter = match rand_draw {
            (0, 0) => 0,
            (min, max) => rng.random_range(min..=max),
        };

        Context {
            activity: ActivityHeap::from_config(&config),
            config,
            trail: Trail::default(),
            clause_db: ClauseStore::default(),
            counters: Counters::default(),
            state: ContextState::Input,
            comments: Vec::default(),
            rng,
            rand_counter,
            rand_draw,
        }
    }

    /// The count of atoms known to the context.
    pub fn atom_count(&self) -> usize {
        self.trail.capacity()
    }

    /// The high-level report for the current state.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// The statistics block: named counters with update-on-read semantics, one per line.
    pub fn statistics(&self) -> String {
        format!(
            "number of choices = {}\nnumber of learnt clauses = {}\nnumber of conflicts = {}\nnumber of propagations = {}\ncpu time = {} ms",
            self.counters.total_decisions,
            self.clause_db.learnt_count(),
            self.counters.total_conflicts,
            self.counters.total_propagations,
            self.counters.elapsed().as_millis(),
        )
    }
}

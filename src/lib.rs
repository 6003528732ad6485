//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! The solver is a conflict-driven clause-learning (CDCL) engine built from three tightly coupled structures:
//! - A [trail](crate::db::trail) of assignments, kept as a sparse set over atoms so that assignment and unassignment are constant time while chronological order is preserved.
//! - A [clause store](crate::db::clause) with two watched literals per clause, supporting near constant-time unit propagation and lazy clause removal.
//! - An [activity heap](crate::db::activity) over atoms, driving a VSIDS-style decision heuristic with occasional randomised second-best decisions.
//!
//! These are composed by a [context](crate::context), with the search itself factored into a collection of [procedures]: propagation, decision, conflict analysis, backjumping, clause-database reduction, and a geometric restart loop.
//!
//! # Orientation
//!
//! A context is built from a [configuration](crate::config), clauses are added either [programmatically](crate::context::Context::add_clause) or by [reading DIMACS](crate::context::Context::read_dimacs), and a call to [solve](crate::context::Context::solve) settles satisfiability.
//!
//! ```rust
//! # use stoat_sat::config::Config;
//! # use stoat_sat::context::Context;
//! # use stoat_sat::reports::Report;
//! # use stoat_sat::structures::literal::Literal;
//! let mut ctx = Context::from_config(Config::default());
//! ctx.grow_to(2);
//!
//! let p = Literal::new(0, true);
//! let q = Literal::new(1, true);
//!
//! assert!(ctx.add_clause(vec![p, q]).is_ok());
//! assert!(ctx.add_clause(vec![p.negate()]).is_ok());
//!
//! assert_eq!(ctx.solve(), Report::Satisfiable);
//! assert_eq!(ctx.trail.value_of(q.atom()), Some(true));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the solve procedures, with targets listed in [misc::log] to help narrow output to relevant parts of a solve.
//! No log implementation is provided.

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod misc;
pub mod reports;

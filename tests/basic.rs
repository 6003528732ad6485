use stoat_sat::{config::Config, context::Context, reports::Report, structures::literal::Literal};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut ctx = Context::from_config(Config::default());
        let p = Literal::new(0, true);

        assert!(ctx.add_clause(vec![p]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
        assert_eq!(ctx.trail.value_of(p.atom()), Some(true));
    }

    #[test]
    fn conflict() {
        let mut ctx = Context::from_config(Config::default());

        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p.negate(), q.negate()]).is_ok());
        assert!(ctx.add_clause(vec![p, q.negate()]).is_ok());
        assert!(ctx.add_clause(vec![p.negate(), q]).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert_eq!(ctx.report(), Report::Unsatisfiable);
    }

    #[test]
    fn unit_conjunct() {
        let mut ctx = Context::from_config(Config::default());

        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p.negate()]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);

        assert_eq!(ctx.trail.value_of(p.atom()), Some(false));
        assert_eq!(ctx.trail.value_of(q.atom()), Some(true));
    }

    // A unit clause is both stored and asserted at the root, before any solve.
    #[test]
    fn unit_addition_asserts_immediately() {
        let mut ctx = Context::from_config(Config::default());

        let p = Literal::new(0, false);
        assert!(ctx.add_clause(vec![p]).is_ok());

        assert_eq!(ctx.clause_db.count(), 1);
        assert_eq!(ctx.trail.value_of(p.atom()), Some(false));
    }

    #[test]
    fn atoms_beyond_the_bound_are_rejected() {
        use stoat_sat::structures::atom::ATOM_MAX;

        let mut ctx = Context::from_config(Config::default());
        let over = Literal::new(ATOM_MAX + 1, true);

        assert!(ctx.add_clause(vec![over]).is_err());
        assert_eq!(ctx.atom_count(), 0);
    }

    #[test]
    fn contradicting_units() {
        let mut ctx = Context::from_config(Config::default());

        let p = Literal::new(0, true);

        assert!(ctx.add_clause(vec![p]).is_ok());
        assert!(ctx.add_clause(vec![p.negate()]).is_err());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn empty_clause_is_an_error() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.add_clause(vec![]).is_err());
    }

    #[test]
    fn empty_formula() {
        let mut ctx = Context::from_config(Config::default());
        assert_eq!(ctx.solve(), Report::Satisfiable);
    }

    // A single unit propagates through implications to a conflict at the root level.
    #[test]
    fn root_level_conflict() {
        let mut ctx = Context::from_config(Config::default());

        let x1 = Literal::new(0, true);
        let x2 = Literal::new(1, true);

        assert!(ctx.add_clause(vec![x1, x2]).is_ok());
        assert!(ctx.add_clause(vec![x1.negate(), x2]).is_ok());
        assert!(ctx.add_clause(vec![x2.negate()]).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn implication_chain() {
        let mut ctx = Context::from_config(Config::default());

        let atoms: Vec<Literal> = (0..6).map(|a| Literal::new(a, true)).collect();

        for pair in atoms.windows(2) {
            assert!(ctx.add_clause(vec![pair[0].negate(), pair[1]]).is_ok());
        }
        assert!(ctx.add_clause(vec![atoms[0]]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);
        for literal in &atoms {
            assert_eq!(ctx.trail.value_of(literal.atom()), Some(true));
        }
    }

    #[test]
    fn pigeons_into_holes() {
        // Three pigeons, two holes.
        let mut ctx = Context::from_config(Config::default());

        let var = |pigeon: u32, hole: u32| Literal::new(pigeon * 2 + hole, true);

        for pigeon in 0..3 {
            assert!(ctx.add_clause(vec![var(pigeon, 0), var(pigeon, 1)]).is_ok());
        }
        for hole in 0..2 {
            for a in 0..3 {
                for b in (a + 1)..3 {
                    let clause = vec![var(a, hole).negate(), var(b, hole).negate()];
                    assert!(ctx.add_clause(clause).is_ok());
                }
            }
        }

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    // Each conflict above the root learns a clause, stored beyond the originals.
    #[test]
    fn conflicts_learn_clauses() {
        let mut ctx = Context::from_config(Config::default());

        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p.negate(), q.negate()]).is_ok());
        assert!(ctx.add_clause(vec![p, q.negate()]).is_ok());
        assert!(ctx.add_clause(vec![p.negate(), q]).is_ok());

        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert!(ctx.counters.total_conflicts >= 1);
        assert!(ctx.clause_db.count() > 4);
    }

    #[test]
    fn statistics_are_reported() {
        let mut ctx = Context::from_config(Config::default());

        let p = Literal::new(0, true);
        let q = Literal::new(1, true);

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p.negate()]).is_ok());

        assert_eq!(ctx.solve(), Report::Satisfiable);

        let statistics = ctx.statistics();
        assert!(statistics.contains("number of choices"));
        assert!(statistics.contains("number of learnt clauses"));
        assert!(statistics.contains("number of conflicts"));
        assert!(statistics.contains("number of propagations"));
        assert!(statistics.contains("cpu time"));
    }
}

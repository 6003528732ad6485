use stoat_sat::{config::Config, context::Context, reports::Report, structures::literal::Literal};

/// An unsatisfiable formula large enough to force restarts under a short schedule.
///
/// Four pigeons into three holes, with at-least-one and at-most-one-per-hole clauses.
fn pigeonhole(ctx: &mut Context) {
    let var = |pigeon: u32, hole: u32| Literal::new(pigeon * 3 + hole, true);

    for pigeon in 0..4 {
        let clause = (0..3).map(|hole| var(pigeon, hole)).collect();
        assert!(ctx.add_clause(clause).is_ok());
    }

    for hole in 0..3 {
        for a in 0..4 {
            for b in (a + 1)..4 {
                let clause = vec![var(a, hole).negate(), var(b, hole).negate()];
                assert!(ctx.add_clause(clause).is_ok());
            }
        }
    }
}

mod schedules {
    use super::*;

    #[test]
    fn default_schedule() {
        let mut ctx = Context::from_config(Config::default());
        pigeonhole(&mut ctx);
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    // A tight conflict budget forces the solve through many restarts.
    #[test]
    fn eager_restarts() {
        let config = Config {
            restart_base: 2,
            restart_factor: 2.0,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        pigeonhole(&mut ctx);
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
        assert!(ctx.counters.restarts > 0);
    }

    // Forgetting every learnt clause at each restart must not lose derived facts.
    #[test]
    fn total_amnesia() {
        let config = Config {
            restart_base: 2,
            restart_factor: 2.0,
            forgetfulness: 1.0,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        pigeonhole(&mut ctx);
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    #[test]
    fn perfect_recall() {
        let config = Config {
            restart_base: 2,
            restart_factor: 1.5,
            forgetfulness: 0.0,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);
        pigeonhole(&mut ctx);
        assert_eq!(ctx.solve(), Report::Unsatisfiable);
    }

    // Schedules and randomness change the search path, never the verdict.
    #[test]
    fn verdict_is_schedule_independent() {
        let configs = [
            Config::default(),
            Config {
                restart_base: 2,
                restart_factor: 2.0,
                forgetfulness: 1.0,
                randomness: 0.5,
                seed: 42,
                ..Config::default()
            },
            Config {
                restart_base: 1000,
                restart_factor: 1.2,
                forgetfulness: 0.3,
                randomness: 0.0,
                ..Config::default()
            },
        ];

        for config in configs {
            let mut ctx = Context::from_config(config);
            pigeonhole(&mut ctx);
            assert_eq!(ctx.solve(), Report::Unsatisfiable);
        }
    }

    #[test]
    fn satisfiable_under_every_schedule() {
        let configs = [
            Config::default(),
            Config {
                restart_base: 2,
                restart_factor: 2.0,
                forgetfulness: 1.0,
                randomness: 0.25,
                ..Config::default()
            },
        ];

        for config in configs {
            let mut ctx = Context::from_config(config);

            // A satisfiable 3-colouring style instance over six atoms.
            let atoms: Vec<Literal> = (0..6).map(|a| Literal::new(a, true)).collect();
            assert!(ctx.add_clause(vec![atoms[0], atoms[1], atoms[2]]).is_ok());
            assert!(ctx.add_clause(vec![atoms[3], atoms[4], atoms[5]]).is_ok());
            assert!(ctx.add_clause(vec![atoms[0].negate(), atoms[3].negate()]).is_ok());
            assert!(ctx.add_clause(vec![atoms[1].negate(), atoms[4].negate()]).is_ok());
            assert!(ctx.add_clause(vec![atoms[2].negate(), atoms[5].negate()]).is_ok());

            assert_eq!(ctx.solve(), Report::Satisfiable);
        }
    }
}

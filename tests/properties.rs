use stoat_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{clause::ClauseStatus, literal::Literal},
};

/// A satisfiable instance with enough structure to exercise conflict analysis.
fn ordering_instance(ctx: &mut Context) {
    let var = |a: u32| Literal::new(a, true);

    assert!(ctx.add_clause(vec![var(0), var(1), var(2)]).is_ok());
    assert!(ctx.add_clause(vec![var(0).negate(), var(3)]).is_ok());
    assert!(ctx.add_clause(vec![var(1).negate(), var(3)]).is_ok());
    assert!(ctx.add_clause(vec![var(2).negate(), var(4)]).is_ok());
    assert!(ctx.add_clause(vec![var(3).negate(), var(5)]).is_ok());
    assert!(ctx.add_clause(vec![var(4).negate(), var(5).negate()]).is_ok());
    assert!(ctx.add_clause(vec![var(5), var(6)]).is_ok());
    assert!(ctx.add_clause(vec![var(6).negate(), var(0)]).is_ok());
}

mod soundness {
    use super::*;

    // The diagnostic switches panic on a broken invariant, so a clean return is the assertion.
    #[test]
    fn all_switches_on() {
        let mut config = Config::default();
        config.checks.solution = true;
        config.checks.propagation = true;
        config.checks.watches = true;

        let mut ctx = Context::from_config(config);
        ordering_instance(&mut ctx);

        assert_eq!(ctx.solve(), Report::Satisfiable);
    }

    #[test]
    fn every_clause_is_satisfied() {
        let mut ctx = Context::from_config(Config::default());
        ordering_instance(&mut ctx);

        assert_eq!(ctx.solve(), Report::Satisfiable);

        for clause in ctx.clause_db.clauses() {
            assert!(clause
                .literals()
                .any(|l| ctx.trail.value_of_literal(l) == Some(true)));
        }
    }

    #[test]
    fn every_atom_is_valued() {
        let mut ctx = Context::from_config(Config::default());
        ordering_instance(&mut ctx);

        assert_eq!(ctx.solve(), Report::Satisfiable);

        for atom in 0..ctx.atom_count() as u32 {
            assert!(ctx.trail.value_of(atom).is_some());
        }
    }
}

mod reversibility {
    use super::*;

    // Assignments made under a checkpoint are unwound exactly, with earlier levels untouched.
    #[test]
    fn undo_is_exact() {
        let mut ctx = Context::from_config(Config::default());
        ctx.grow_to(4);

        let p = Literal::new(0, true);
        let q = Literal::new(1, false);
        let r = Literal::new(2, true);

        ctx.trail.assign(p, None);

        ctx.trail.save();
        ctx.trail.assign(q, None);
        ctx.trail.assign(r, None);

        assert_eq!(ctx.trail.level(), 1);
        assert_eq!(ctx.trail.assigned_count(), 3);

        let freed = ctx.trail.undo();

        assert_eq!(ctx.trail.level(), 0);
        assert_eq!(ctx.trail.assigned_count(), 1);
        assert_eq!(ctx.trail.value_of(p.atom()), Some(true));
        assert_eq!(ctx.trail.value_of(q.atom()), None);
        assert_eq!(ctx.trail.value_of(r.atom()), None);

        assert_eq!(freed.len(), 2);
        assert!(freed.contains(&q.atom()));
        assert!(freed.contains(&r.atom()));
    }

    // The cached value of an atom survives unassignment, so re-decisions keep their phase.
    #[test]
    fn phases_are_saved() {
        let mut ctx = Context::from_config(Config::default());
        ctx.grow_to(2);

        let q = Literal::new(1, true);

        ctx.trail.save();
        ctx.trail.assign(q, None);
        ctx.trail.undo();

        assert_eq!(ctx.trail.value_of(q.atom()), None);
        assert!(ctx.trail.cached_value(q.atom()));
    }
}

mod learning {
    use super::*;

    // The learned clause asserts: after backjumping, its slot-0 literal is the sole
    // unassigned one, every other literal is false, and at least one level was undone.
    #[test]
    fn learned_clause_asserts_after_backjump() {
        let mut ctx = Context::from_config(Config::default());

        let a = Literal::new(0, true);
        let b = Literal::new(1, true);
        let c = Literal::new(2, true);

        assert!(ctx.add_clause(vec![a.negate(), b.negate(), c]).is_ok());
        assert!(ctx.add_clause(vec![a.negate(), b.negate(), c.negate()]).is_ok());

        ctx.trail.save();
        ctx.trail.assign(a, None);
        assert_eq!(ctx.propagate(), None);

        ctx.trail.save();
        ctx.trail.assign(b, None);
        let conflict = ctx.propagate();
        assert!(conflict.is_some());

        let before = ctx.trail.level();
        let (levels, learned) = ctx.analyze(conflict.unwrap());
        assert!(levels >= 1);
        ctx.backjump(levels);
        assert!(ctx.trail.level() < before);

        let unassigned: Vec<Literal> = learned
            .literals()
            .filter(|l| ctx.trail.value_of_literal(*l).is_none())
            .collect();
        assert_eq!(unassigned, vec![learned.literal(0)]);
        for slot in 1..learned.len() {
            assert_eq!(ctx.trail.value_of_literal(learned.literal(slot)), Some(false));
        }

        // Here, resolution settles on the level-two decision as the pivot.
        assert_eq!(learned.literal(0), b.negate());
    }
}

mod reduction_safety {
    use super::*;

    // Aggressive forgetting must never remove a clause which is the reason for a trail literal.
    #[test]
    fn reasons_survive_forgetting() {
        let config = Config {
            restart_base: 2,
            restart_factor: 2.0,
            forgetfulness: 1.0,
            ..Config::default()
        };
        let mut ctx = Context::from_config(config);

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

        assert_eq!(ctx.solve(), Report::Unsatisfiable);

        for &atom in ctx.trail.assigned() {
            if let Some(reason) = ctx.trail.reason_of(atom) {
                assert_ne!(ctx.clause_db.status(reason), ClauseStatus::PendingRemoval);
            }
        }
    }
}

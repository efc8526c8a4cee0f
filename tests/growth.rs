use otter_cnf::{builder::parse, config::Config, context::Context};

mod common;

use common::equivalence_chain;

mod growth {
    use super::*;

    #[test]
    fn tseitin_is_linear() {
        let ctx = Context::from_config(Config::default());

        let counts = (1..=24)
            .map(|n| {
                ctx.tseitin_and_variable_map(&equivalence_chain(n))
                    .unwrap()
                    .clauses
                    .len()
            })
            .collect::<Vec<_>>();

        let steps = counts
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect::<Vec<_>>();

        assert!(steps.windows(2).all(|pair| pair[0] == pair[1]), "{counts:?}");
    }

    #[test]
    fn distribution_is_exponential() {
        let ctx = Context::from_config(Config::default());

        let counts = (1..=5)
            .map(|n| {
                ctx.naive_clauses(&equivalence_chain(n))
                    .unwrap()
                    .len()
            })
            .collect::<Vec<_>>();

        // A chain of n equivalences is the parity of n + 1 atoms, and each non-tautologous clause of a CNF of parity excludes at most one of the 2^n falsifying valuations.
        for (n, count) in (1..).zip(&counts) {
            assert!(*count >= 1 << n, "{counts:?}");
        }

        let steps = counts
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect::<Vec<_>>();
        assert!(steps.windows(2).all(|pair| pair[0] < pair[1]), "{counts:?}");
    }

    #[test]
    fn same_family() {
        let ctx = Context::from_config(Config::default());
        let formula = parse(&equivalence_chain(4)).unwrap();

        let naive = ctx.naive_encode(&formula).unwrap();
        let tseitin = ctx.encode(&formula).unwrap();

        assert!(tseitin.clauses.len() < naive.clauses.len());
        assert_eq!(naive.atom_map.auxiliary_count(), 0);
        assert_eq!(tseitin.atom_map.original_count(), 5);
    }
}

use otter_cnf::{
    builder::parse,
    config::Config,
    context::Context,
    structures::{atom, formula::Formula, valuation::every_valuation},
};
use rand::{rngs::StdRng, SeedableRng};

mod common;

use common::{random_formula, ATOMS};

/// Random formulas, from a fixed seed.
fn formulas(seed: u64, count: usize, depth: usize) -> Vec<Formula> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| random_formula(&mut rng, &ATOMS, depth))
        .collect()
}

/// Whether `a` and `b` have the same value on every valuation of the atoms of `a`.
fn equivalent(a: &Formula, b: &Formula) -> bool {
    every_valuation(a.atoms()).all(|valuation| a.evaluate(&valuation) == b.evaluate(&valuation))
}

mod round_trip {
    use super::*;

    #[test]
    fn display_then_parse() {
        for formula in formulas(1, 200, 5) {
            let text = formula.to_string();
            let parsed = parse(&text).unwrap();
            assert!(parsed.same_up_to_order(&formula), "{text}");
        }
    }
}

mod normal_forms {
    use super::*;

    #[test]
    fn nnf() {
        for formula in formulas(2, 200, 4) {
            let nnf = formula.to_nnf();
            assert!(nnf.is_nnf(), "{formula}");
            assert!(nnf.is_chain_flat(), "{formula}");
            assert!(equivalent(&formula, &nnf), "{formula}");
        }
    }

    #[test]
    fn distribution() {
        for formula in formulas(3, 100, 3) {
            let cnf = formula.to_nnf().distribute();
            assert!(cnf.is_chain_flat(), "{formula}");
            assert!(equivalent(&formula, &cnf), "{formula}");

            let clauses = cnf.clauses().unwrap();
            let rebuilt = Formula::from_clauses(&clauses).unwrap();
            assert!(equivalent(&formula, &rebuilt), "{formula}");
        }
    }
}

mod tseitin {
    use super::*;

    #[test]
    fn equisatisfiable() {
        let ctx = Context::from_config(Config::default());

        for formula in formulas(4, 100, 4) {
            let encoding = ctx.encode(&formula).unwrap();

            for valuation in every_valuation(formula.atoms()) {
                assert_eq!(
                    formula.evaluate(&valuation),
                    Some(common::satisfiable_extending(&encoding, &valuation)),
                    "{formula} on {valuation:?}"
                );
            }
        }
    }

    #[test]
    fn flat_cnf() {
        let ctx = Context::from_config(Config::default());

        for formula in formulas(5, 200, 5) {
            let cnf = ctx.tseitin_cnf(&formula).unwrap();
            assert!(cnf.is_chain_flat(), "{formula}");
            assert!(cnf.clauses().is_ok(), "{formula}");
        }
    }

    #[test]
    fn linear_size() {
        let ctx = Context::from_config(Config::default());

        for formula in formulas(6, 200, 6) {
            let encoding = ctx.encode(&formula).unwrap();
            assert!(encoding.clauses.len() <= 1 + 7 * formula.size(), "{formula}");
        }
    }

    #[test]
    fn auxiliary_atoms() {
        let ctx = Context::from_config(Config::default());

        for formula in formulas(7, 100, 5) {
            let encoding = ctx.encode(&formula).unwrap();
            let map = &encoding.atom_map;

            let mut numbers = map.names()[map.original_count()..]
                .iter()
                .map(|name| {
                    assert!(atom::is_reserved(name));
                    name[1..].parse::<usize>().unwrap()
                })
                .collect::<Vec<_>>();
            numbers.sort_unstable();

            assert_eq!(numbers, (0..map.auxiliary_count()).collect::<Vec<_>>());
        }
    }
}

mod atom_map {
    use otter_cnf::{config::AtomOrder, structures::clause::IntClauseT};

    use super::*;

    #[test]
    fn bijection() {
        let ctx = Context::from_config(Config::default());

        for formula in formulas(8, 100, 5) {
            let encoding = ctx.encode(&formula).unwrap();
            let map = &encoding.atom_map;

            let mut indicies = encoding
                .clauses
                .iter()
                .flat_map(|clause| clause.atoms())
                .map(|atom| atom as usize - 1)
                .collect::<Vec<_>>();
            indicies.sort_unstable();
            indicies.dedup();
            assert_eq!(indicies, (0..map.count()).collect::<Vec<_>>());

            let original_map = encoding.original_map();
            assert_eq!(original_map.len(), formula.atoms().len());
            for (name, index) in &original_map {
                assert!(*index < map.original_count());
                assert_eq!(map.name(*index), Some(name.as_str()));
            }
        }
    }

    #[test]
    fn order() {
        let mut config = Config::default();
        assert!(config.atom_order.set(AtomOrder::Lexicographic));
        let ctx = Context::from_config(config);

        for formula in formulas(9, 50, 4) {
            let encoding = ctx.encode(&formula).unwrap();
            let names = encoding.atom_map.original_names();
            assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn deterministic() {
        let ctx = Context::from_config(Config::default());

        for formula in formulas(10, 50, 5) {
            assert_eq!(ctx.encode(&formula), ctx.encode(&formula));
            assert_eq!(
                ctx.encode(&formula).unwrap().atom_map.original_names(),
                formula.atoms().as_slice()
            );
        }
    }
}

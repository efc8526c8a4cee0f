/*!
The context --- through which formulas are read, transformed, and encoded.

A [Context] holds a [configuration](crate::config), and each method of a context is a pure function of the configuration and the arguments of the method.
In particular, no state is kept between calls, and so a context may be shared between threads.

Two paths from a formula to clauses are given:
- The production path, via the [Tseitin transformation](crate::procedures::tseitin), with a result linear in the size of the formula, returned as an [Encoding] of integer clauses.
- The naive path, via [distribution](crate::procedures::distribute), with a result which may be exponential in the size of the formula, returned as a collection of named clauses.

# Example
```rust
# use otter_cnf::context::Context;
# use otter_cnf::config::Config;
let context = Context::from_config(Config::default());

let encoding = context.tseitin_and_variable_map("(a->b)").unwrap();

assert_eq!(encoding.original_map().get("a"), Some(&0));
assert_eq!(encoding.original_map().get("b"), Some(&1));
assert_eq!(encoding.atom_map.auxiliary_count(), 1);

// b is true, and so the auxiliary atom p0 must be true.
assert!(encoding.satisfied_on(&[false, true, true]));
// a is true and b is false, and so no value of p0 satisfies the clauses.
assert!(!encoding.satisfied_on(&[true, false, true]));
assert!(!encoding.satisfied_on(&[true, false, false]));
```
*/

mod batch;

use crate::{
    builder,
    config::{self, AtomOrder, Config},
    db::atom::AtomMap,
    misc::log::targets::{self},
    procedures::{tseitin::tseitin, Encoding},
    structures::{clause::NamedClause, formula::Formula},
    types::err::{self, ErrorKind},
};

/// A context, holding a configuration.
#[derive(Clone, Debug)]
pub struct Context {
    /// The configuration of the context.
    pub config: Config,
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Reads a formula from `text`, bounded by the configured depth limit.
    pub fn parse(&self, text: &str) -> Result<Formula, ErrorKind> {
        builder::parse_with_depth_limit(text, self.config.depth_limit.value)
    }

    /// Fails if the nesting of connectives in `formula` is deeper than the configured depth limit.
    ///
    /// A formula read by [parse](Context::parse) always passes the check, and so the check matters for formulas built by other means.
    pub fn check_depth(&self, formula: &Formula) -> Result<(), ErrorKind> {
        let limit = config::effective_depth_limit(self.config.depth_limit.value);
        match formula.depth().saturating_sub(1) > limit {
            true => {
                log::warn!(target: targets::CONTEXT, "Formula deeper than {limit}");
                Err(ErrorKind::from(err::ResourceError::DepthExceeded { limit }))
            }
            false => Ok(()),
        }
    }

    /// The original atoms of `formula`, in the configured order.
    pub fn ordered_atoms(&self, formula: &Formula) -> Vec<String> {
        let mut atoms = formula.atoms();
        match self.config.atom_order.value {
            AtomOrder::FirstAppearance => {}
            AtomOrder::Lexicographic => atoms.sort_unstable(),
        }
        atoms
    }

    /// `formula` in conjunctive normal form, by distribution.
    pub fn naive_cnf(&self, formula: &Formula) -> Result<Formula, ErrorKind> {
        self.check_depth(formula)?;
        Ok(formula.to_nnf().distribute())
    }

    /// The clauses of the formula read from `text`, by distribution.
    pub fn naive_clauses(&self, text: &str) -> Result<Vec<NamedClause>, ErrorKind> {
        let formula = self.parse(text)?;
        let clauses = self.naive_cnf(&formula)?.clauses()?;

        log::info!(target: targets::CONTEXT, "{} naive clauses for {formula}", clauses.len());
        Ok(clauses)
    }

    /// The Tseitin transformation of `formula`.
    pub fn tseitin_cnf(&self, formula: &Formula) -> Result<Formula, ErrorKind> {
        self.check_depth(formula)?;
        tseitin(formula)
    }

    /// The integer clauses of the Tseitin transformation of `formula`, together with the map used to build the clauses.
    pub fn encode(&self, formula: &Formula) -> Result<Encoding, ErrorKind> {
        let cnf = self.tseitin_cnf(formula)?;
        let clauses = cnf.clauses()?;

        let (atom_map, clauses) = AtomMap::translate(self.ordered_atoms(formula), &clauses)?;

        log::info!(target: targets::CONTEXT,
            "Encoded {formula} as {} clauses over {} atoms",
            clauses.len(), atom_map.count()
        );
        Ok(Encoding { clauses, atom_map })
    }

    /// The integer clauses of the naive conjunctive normal form of `formula`.
    ///
    /// As no auxiliary atoms are introduced, every atom of the map is original.
    pub fn naive_encode(&self, formula: &Formula) -> Result<Encoding, ErrorKind> {
        let clauses = self.naive_cnf(formula)?.clauses()?;
        let (atom_map, clauses) = AtomMap::translate(self.ordered_atoms(formula), &clauses)?;
        Ok(Encoding { clauses, atom_map })
    }

    /// Reads a formula from `text` and [encodes](Context::encode) the formula.
    pub fn tseitin_and_variable_map(&self, text: &str) -> Result<Encoding, ErrorKind> {
        let formula = self.parse(text)?;
        self.encode(&formula)
    }
}

/*!
Procedures which transform a formula.

- [Negation normal form](nnf), with implications and equivalences eliminated and negations pushed to atoms.
- [Distribution](distribute), from negation normal form to conjunctive normal form.
- [The Tseitin transformation](tseitin), from any formula to an equisatisfiable formula in conjunctive normal form.
- [Clause extraction](clauses), from a formula in conjunctive normal form to a collection of clauses.

The result of the full pipeline, from formula to integer clauses, is an [Encoding].
*/

pub mod clauses;
pub mod distribute;
pub mod nnf;
pub mod tseitin;

use std::collections::HashMap;

use crate::{
    db::atom::AtomMap,
    structures::clause::{IntClause, IntClauseT},
};

/// Integer clauses, together with the map between atoms and indicies used to build the clauses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoding {
    /// The clauses, as integer literals of ±(index + 1).
    pub clauses: Vec<IntClause>,

    /// The map between names and indicies.
    pub atom_map: AtomMap,
}

impl Encoding {
    /// The map from each original atom to its index.
    pub fn original_map(&self) -> HashMap<String, usize> {
        self.atom_map.original_map()
    }

    /// A count of all atoms, original and auxiliary.
    pub fn atom_count(&self) -> usize {
        self.atom_map.count()
    }

    /// The clauses as a DIMACS document, with a `p cnf` header.
    ///
    /// ```rust
    /// # use otter_cnf::context::Context;
    /// let context = Context::default();
    /// let encoding = context.tseitin_and_variable_map("x1").unwrap();
    ///
    /// assert_eq!(encoding.as_dimacs(), "p cnf 2 3\n 2 0\n-2  1 0\n-1  2 0\n");
    /// ```
    pub fn as_dimacs(&self) -> String {
        let mut dimacs = format!("p cnf {} {}\n", self.atom_count(), self.clauses.len());
        for clause in &self.clauses {
            dimacs.push_str(&clause.as_dimacs(true));
            dimacs.push('\n');
        }
        dimacs
    }

    /// Whether every clause is satisfied on the valuation, where the value of the atom with index *i* is at *i*.
    pub fn satisfied_on(&self, valuation: &[bool]) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause.satisfied_on(valuation))
    }
}

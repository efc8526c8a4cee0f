//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//! Order is kept, though nothing depends on the order of literals in a clause.
//!
//! ```rust
//! # use otter_cnf::structures::clause::{Clause, IntClause, IntClauseT};
//! let clause: IntClause = vec![1, -2, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), " 1 -2  3 0");
//!
//! assert!(clause.satisfied_on(&[false, false, false]));
//! assert!(!clause.satisfied_on(&[false, true, false]));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal, NamedLiteral},
};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause.
    fn as_string(&self) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;
}

/// The implementation of a clause as a vector of named literals.
pub type NamedClause = Vec<NamedLiteral>;

/// The implementation of a clause as a vector of integers.
pub type IntClause = Vec<IntLiteral>;

impl Clause for NamedClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl Clause for IntClause {
    fn as_string(&self) -> String {
        self.iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// Methods specific to clauses of integer literals.
pub trait IntClauseT: Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// Whether the clause is satisfied on the given valuation, where the value of atom *a* is at index *a - 1*.
    ///
    /// A literal whose atom is outside of the valuation does not satisfy the clause.
    fn satisfied_on(&self, valuation: &[bool]) -> bool;
}

impl IntClauseT for IntClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut dimacs_string = String::new();
        for literal in self {
            match literal.polarity() {
                true => dimacs_string.push_str(format!(" {literal} ").as_str()),
                false => dimacs_string.push_str(format!("{literal} ").as_str()),
            };
        }
        if zero {
            dimacs_string += "0";
            dimacs_string
        } else {
            dimacs_string.pop();
            dimacs_string
        }
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn satisfied_on(&self, valuation: &[bool]) -> bool {
        self.iter().any(|literal| {
            (literal.atom() as usize)
                .checked_sub(1)
                .and_then(|index| valuation.get(index))
                .is_some_and(|value| *value == literal.polarity())
        })
    }
}

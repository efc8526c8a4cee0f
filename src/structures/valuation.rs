/*!
Valuations, aka. assignments of (boolean) values to atoms.

A valuation is anything which returns the value of an atom by name, if the atom has a value.
The value of a formula on a valuation is given by [Formula::evaluate].

```rust
# use otter_cnf::structures::{formula::Formula, valuation::every_valuation};
let formula: Formula = "(a<->~b)".parse().unwrap();

let models = every_valuation(formula.atoms())
    .filter(|valuation| formula.evaluate(valuation) == Some(true))
    .count();

assert_eq!(models, 2);
```
*/

use std::collections::HashMap;

use crate::structures::formula::Formula;

/// Something which has a method for returning the value of an atom.
pub trait Valuation {
    /// The value of the atom named `atom`, if the atom has a value.
    fn value_of(&self, atom: &str) -> Option<bool>;
}

impl Valuation for HashMap<String, bool> {
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl Valuation for HashMap<&str, bool> {
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl Formula {
    /// The value of the formula on `valuation`, or None if some relevant atom has no value.
    pub fn evaluate(&self, valuation: &impl Valuation) -> Option<bool> {
        match self {
            Formula::Atom(name) => valuation.value_of(name),

            Formula::Negation(child) => child.evaluate(valuation).map(|value| !value),

            Formula::And(children) => {
                for child in children {
                    if !child.evaluate(valuation)? {
                        return Some(false);
                    }
                }
                Some(true)
            }

            Formula::Or(children) => {
                for child in children {
                    if child.evaluate(valuation)? {
                        return Some(true);
                    }
                }
                Some(false)
            }

            Formula::Implies(antecedent, consequent) => {
                let antecedent = antecedent.evaluate(valuation)?;
                let consequent = consequent.evaluate(valuation)?;
                Some(!antecedent || consequent)
            }

            Formula::Equivalent(left, right) => {
                Some(left.evaluate(valuation)? == right.evaluate(valuation)?)
            }
        }
    }
}

/// An iterator over every valuation of `atoms`.
///
/// There are 2<sup>n</sup> valuations of n atoms, so this is only of use for small collections of atoms.
///
/// # Panics
/// If there are [MAX_VALUATION_ATOMS] or more atoms.
pub fn every_valuation(atoms: Vec<String>) -> impl Iterator<Item = HashMap<String, bool>> {
    assert!(
        atoms.len() < MAX_VALUATION_ATOMS,
        "Valuations of {} atoms",
        atoms.len()
    );
    let count = 1_u64 << atoms.len();
    (0..count).map(move |bits| {
        atoms
            .iter()
            .enumerate()
            .map(|(index, atom)| (atom.clone(), (bits >> index) & 1 == 1))
            .collect()
    })
}

/// A bound on the number of atoms given to [every_valuation], as valuations are counted by a [u64].
pub const MAX_VALUATION_ATOMS: usize = u64::BITS as usize;

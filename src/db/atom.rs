/*!
A map between the names of atoms and indicies, together with the translation of named clauses to integer clauses.

Indicies are contiguous from `0`:
- Each original atom has an index in `0..n`, where *n* is the count of original atoms.
- Each auxiliary atom has an index in `n..n+k`, where *k* is the count of auxiliary atoms.

The order of original atoms is given when the map is built, and auxiliary atoms are indexed in order of first appearance in the translated clauses.

The [atom](crate::structures::atom::Atom) of a name is one more than its index, and so an [integer literal](crate::structures::literal::IntLiteral) is ±(index + 1).
This keeps the negation of the atom with index `0` distinct from the atom itself, and the integer clauses may be written as DIMACS without adjustment.

```rust
# use otter_cnf::db::atom::AtomMap;
# use otter_cnf::structures::literal::NamedLiteral;
let clauses = vec![
    vec![NamedLiteral::new("p0", true)],
    vec![NamedLiteral::new("p0", false), NamedLiteral::new("x1", true)],
];

let (map, int_clauses) = AtomMap::translate(["x1"], &clauses).unwrap();

assert_eq!(map.index("x1"), Some(0));
assert_eq!(map.index("p0"), Some(1));
assert_eq!(int_clauses, vec![vec![2], vec![-2, 1]]);
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{IntClause, NamedClause},
        literal::{IntLiteral, Literal, NamedLiteral},
    },
    types::err::{self},
};

/// A bijection between names of atoms and indicies.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AtomMap {
    /// Names, indexed by index.
    names: Vec<String>,

    /// Indicies, indexed by name.
    indicies: HashMap<String, usize>,

    /// The count of original atoms, each of which has an index below the count.
    original_count: usize,
}

impl AtomMap {
    /// A map of the given original atoms, indexed in the order given.
    ///
    /// Any repeated name keeps the index of its first occurrence.
    pub fn from_originals<S: Into<String>>(
        originals: impl IntoIterator<Item = S>,
    ) -> Result<Self, err::ResourceError> {
        let mut map = AtomMap::default();
        for name in originals {
            map.index_or_insert(name.into())?;
        }
        map.original_count = map.names.len();

        log::trace!(target: targets::ATOM_MAP, "Indexed {} original atoms", map.original_count);
        Ok(map)
    }

    /// A map of the given original atoms, extended with any other atom of `clauses`, together with the translation of `clauses` to integer clauses.
    pub fn translate<S: Into<String>>(
        originals: impl IntoIterator<Item = S>,
        clauses: &[NamedClause],
    ) -> Result<(Self, Vec<IntClause>), err::ResourceError> {
        let mut map = AtomMap::from_originals(originals)?;

        let int_clauses = clauses
            .iter()
            .map(|clause| map.translate_clause(clause))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(target: targets::ATOM_MAP,
            "Translated {} clauses over {} original and {} auxiliary atoms",
            int_clauses.len(), map.original_count(), map.auxiliary_count()
        );
        Ok((map, int_clauses))
    }

    /// The integer clause of `clause`, indexing any fresh atom as auxiliary.
    pub fn translate_clause(&mut self, clause: &NamedClause) -> Result<IntClause, err::ResourceError> {
        clause
            .iter()
            .map(|literal| self.literal_or_insert(literal))
            .collect()
    }

    /// The integer literal of `literal`, indexing the atom of the literal as auxiliary if fresh.
    fn literal_or_insert(&mut self, literal: &NamedLiteral) -> Result<IntLiteral, err::ResourceError> {
        let index = match self.indicies.get(literal.name()) {
            Some(index) => *index,
            None => self.index_or_insert(literal.name().to_string())?,
        };
        Ok(IntLiteral::new(atom_of_index(index)?, literal.polarity()))
    }

    fn index_or_insert(&mut self, name: String) -> Result<usize, err::ResourceError> {
        if let Some(index) = self.indicies.get(&name) {
            return Ok(*index);
        }

        let index = self.names.len();
        // Every index must have an atom which is representable as an integer literal.
        atom_of_index(index)?;

        log::trace!(target: targets::ATOM_MAP, "Indexed {name} at {index}");
        self.indicies.insert(name.clone(), index);
        self.names.push(name);
        Ok(index)
    }

    /// The index of `name`, if indexed.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.indicies.get(name).copied()
    }

    /// The atom of `name`, if indexed.
    pub fn atom(&self, name: &str) -> Option<Atom> {
        self.index(name).and_then(|index| atom_of_index(index).ok())
    }

    /// The integer literal of `literal`, if the atom of the literal is indexed.
    pub fn literal(&self, literal: &NamedLiteral) -> Option<IntLiteral> {
        self.atom(literal.name())
            .map(|atom| IntLiteral::new(atom, literal.polarity()))
    }

    /// The name at `index`, if any.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Names of all atoms, in order of index.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Names of the original atoms, in order of index.
    pub fn original_names(&self) -> &[String] {
        &self.names[..self.original_count]
    }

    /// Whether `name` is an original atom.
    pub fn is_original(&self, name: &str) -> bool {
        self.index(name)
            .is_some_and(|index| index < self.original_count)
    }

    /// A count of original atoms.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of auxiliary atoms.
    pub fn auxiliary_count(&self) -> usize {
        self.names.len() - self.original_count
    }

    /// A count of all atoms.
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// The map from each original atom to its index.
    pub fn original_map(&self) -> HashMap<String, usize> {
        self.original_names()
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), index))
            .collect()
    }
}

/// The atom of an index, if representable as an integer literal.
fn atom_of_index(index: usize) -> Result<Atom, err::ResourceError> {
    match index
        .checked_add(1)
        .and_then(|atom| IntLiteral::try_from(atom).ok())
    {
        Some(literal) => Ok(literal.atom()),
        None => Err(err::ResourceError::AtomsExhausted),
    }
}

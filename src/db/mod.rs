//! Databases for holding information relevant to an encoding.
//!
//!   - [The atom map](crate::db::atom)
//!     + A bijection between the names of atoms and indicies. \
//!       From an external perspective there are two important kinds of atom:
//!       * Original atoms \
//!         Atoms of the formula given for encoding, indexed first.
//!       * Auxiliary atoms \
//!         Atoms introduced by the [Tseitin transformation](crate::procedures::tseitin), indexed after every original atom.

pub mod atom;

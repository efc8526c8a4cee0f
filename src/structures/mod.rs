//! Key structures, such as formulas, literals, and clauses.
//!
//! # Formulas
//!
//! A [formula](formula::Formula) is a tree built from [atoms](atom) with negation, conjunction, disjunction, implication, and equivalence.
//! Conjunctions and disjunctions are chains of any (non-zero) length, and a chain never directly contains a chain of the same kind.
//!
//! # Clauses
//!
//! A [clause](clause) is a collection of literals, interpreted as the disjunction of those literals.
//! A collection of clauses is interpreted as the conjunction of those clauses, and so is a formula in conjunctive normal form.
//!
//! Clauses appear in two forms:
//! - With [named literals](literal::NamedLiteral), read directly from a formula.
//! - With [integer literals](literal::IntLiteral), after atoms have been assigned indicies by an [atom map](crate::db::atom::AtomMap).
//!
//! ## (Boolean) values
//!
//! A (boolean) value is one of two things, identified with [true] and [false].
//! A [valuation](valuation) assigns values to atoms, and extends to formulas and clauses in the usual way.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod valuation;

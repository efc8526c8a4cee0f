//! A library for translating propositional formulas into conjunctive normal form.
//!
//! otter_cnf reads a propositional formula from a string, and translates the formula into an equisatisfiable collection of clauses, ready for a satisfiability solver.
//!
//! Two translations are supported:
//! - The [Tseitin transformation](crate::procedures::tseitin), which introduces an auxiliary atom for each compound subformula, and whose result has size linear in the size of the formula.
//! - [Distribution](crate::procedures::distribute), which introduces no atoms, though whose result may be exponential in the size of the formula.
//!
//! # Orientation
//!
//! The library is designed around a [context], which holds a [configuration](crate::config) and from which each translation is made.
//!
//! A translation passes through a handful of stages:
//! - A formula is read by the [parser](crate::builder) into a [Formula](crate::structures::formula::Formula).
//! - The formula is transformed by some [procedures], into [negation normal form](crate::procedures::nnf) and then [conjunctive normal form](crate::procedures::distribute), perhaps after the [Tseitin transformation](crate::procedures::tseitin).
//! - [Clauses](crate::procedures::clauses) are read from the transformed formula.
//! - Each atom of the clauses is given an index in an [atom map](crate::db::atom), and the clauses are written with integer literals.
//!
//! Useful starting points, then, may be:
//! - The [context] for the entry points of a translation.
//! - The [structures] to familiarise yourself with formulas, literals, and clauses.
//! - The [procedures] for the transformations.
//!
//! # Examples
//!
//! + Translate a formula, and check the clauses agree with the formula on each valuation of the original atoms.
//!
//! ```rust
//! # use otter_cnf::context::Context;
//! # use otter_cnf::structures::valuation::every_valuation;
//! let context = Context::default();
//! let text = "(~e|~(a->b)|~((b<->~a)|~(v3&e)))";
//!
//! let formula = context.parse(text).unwrap();
//! let encoding = context.encode(&formula).unwrap();
//!
//! let original_count = encoding.atom_map.original_count();
//! let auxiliary_count = encoding.atom_map.auxiliary_count();
//!
//! let mut satisfiable = false;
//! for valuation in every_valuation(formula.atoms()) {
//!     let mut values = vec![false; original_count];
//!     for (name, value) in &valuation {
//!         values[encoding.atom_map.index(name).unwrap()] = *value;
//!     }
//!
//!     // Some value of the auxiliary atoms satisfies the clauses exactly when the formula is true.
//!     let extends = (0..1_u64 << auxiliary_count).any(|bits| {
//!         let mut full = values.clone();
//!         full.extend((0..auxiliary_count).map(|i| bits >> i & 1 == 1));
//!         encoding.satisfied_on(&full)
//!     });
//!     assert_eq!(Some(extends), formula.evaluate(&valuation));
//!
//!     satisfiable |= extends;
//! }
//!
//! assert!(satisfiable);
//! ```
//!
//! + Write the Tseitin transformation of a formula as DIMACS.
//!
//! ```rust
//! # use otter_cnf::context::Context;
//! let context = Context::default();
//! let encoding = context.tseitin_and_variable_map("(a&b)").unwrap();
//!
//! assert_eq!(
//!     encoding.as_dimacs(),
//!     "p cnf 3 4\n 3 0\n-3  1 0\n-3  2 0\n-1 -2  3 0\n"
//! );
//! ```
//!
//! # Logs
//!
//! To help diagnose issues calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are lists in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the Tseitin transformation](crate::procedures::tseitin) can be filtered with `RUST_LOG=tseitin …` or,
//! - Logs of clause counts without the formulas read can be found with `RUST_LOG=context=info …`

#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod db;

pub mod misc;

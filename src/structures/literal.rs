//! Literals are atoms paired with a (boolean) polarity.
//!
//! Two representations are used:
//! - A [NamedLiteral], pairing the name of an atom with a polarity, as read from a formula.
//! - An [IntLiteral], an integer whose absolute value is an [Atom] and whose sign is the polarity, as given to a solver.
//!
//! ```rust
//! # use otter_cnf::structures::literal::{IntLiteral, Literal, NamedLiteral};
//! let literal = NamedLiteral::new("x1", false);
//! assert_eq!(literal.to_string(), "~x1");
//! assert_eq!(literal.negate().to_string(), "x1");
//!
//! let int_literal = IntLiteral::new(3, false);
//! assert_eq!(int_literal, -3);
//! assert_eq!(int_literal.atom(), 3);
//! assert!(int_literal.negate().polarity());
//! ```

use crate::{
    structures::{atom::Atom, formula::Formula},
    types::err::ClauseError,
};

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;
}

/// The representation of a literal as an integer, with sign indicating polarity.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }
}

/// The representation of a literal as the name of an atom paired with a boolean.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedLiteral {
    /// The name of the atom of the literal.
    name: String,

    /// The polarity of the literal.
    polarity: bool,
}

impl NamedLiteral {
    pub fn new(name: impl Into<String>, polarity: bool) -> Self {
        NamedLiteral {
            name: name.into(),
            polarity,
        }
    }

    pub fn negate(&self) -> Self {
        NamedLiteral {
            name: self.name.clone(),
            polarity: !self.polarity,
        }
    }

    /// The name of the atom of the literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn polarity(&self) -> bool {
        self.polarity
    }
}

impl std::fmt::Display for NamedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.name),
            false => write!(f, "~{}", self.name),
        }
    }
}

impl TryFrom<&Formula> for NamedLiteral {
    type Error = ClauseError;

    fn try_from(formula: &Formula) -> Result<Self, Self::Error> {
        match formula {
            Formula::Atom(name) => Ok(NamedLiteral::new(name.as_str(), true)),
            Formula::Negation(child) => match child.as_ref() {
                Formula::Atom(name) => Ok(NamedLiteral::new(name.as_str(), false)),
                _ => Err(ClauseError::NotCNF),
            },
            _ => Err(ClauseError::NotCNF),
        }
    }
}

impl From<&NamedLiteral> for Formula {
    fn from(literal: &NamedLiteral) -> Self {
        let atom = Formula::atom(literal.name());
        match literal.polarity() {
            true => atom,
            false => Formula::negation(atom),
        }
    }
}

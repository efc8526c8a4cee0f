//! Error types used in the library.
//!
//! - Parse errors are external, and follow from malformed input.
//! - Config errors are external, and follow from input which is well-formed but unsuitable for some procedure --- e.g. a formula which uses the reserved prefix for auxiliary atoms.
//! - Resource errors guard against formulas nested deeply enough to exhaust the stack.
//! - Clause errors are internal, and indicate a formula was passed to clause extraction before being put in conjunctive normal form.
//!
//! No error is recoverable for the call which returned it, and no partial result is returned alongside an error.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Clause(ClauseError),
    Config(ConfigError),
    Parse(ParseError),
    Resource(ResourceError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clause(e) => write!(f, "Clause error: {e}"),
            Self::Config(e) => write!(f, "Config error: {e}"),
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Resource(e) => write!(f, "Resource error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when reading clauses from a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseError {
    /// The formula is not a conjunction of flat disjunctions (or literals).
    NotCNF,
}

impl std::fmt::Display for ClauseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCNF => write!(f, "the formula is not in conjunctive normal form"),
        }
    }
}

impl From<ClauseError> for ErrorKind {
    fn from(e: ClauseError) -> Self {
        ErrorKind::Clause(e)
    }
}

/// Errors from a violated precondition of some procedure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// An atom of the formula begins with the prefix reserved for auxiliary atoms.
    ReservedPrefix(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReservedPrefix(atom) => write!(
                f,
                "the atom '{atom}' begins with the prefix '{}' reserved for auxiliary atoms",
                crate::structures::atom::AUXILIARY_PREFIX
            ),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during parsing.
///
/// Positions are byte offsets into the input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The input was exhausted where some formula was expected.
    Empty { position: usize },

    /// A character which cannot begin the expected token.
    UnknownToken { position: usize, found: char },

    /// A parenthesis was opened but not closed where expected.
    ///
    /// This covers chains which mix `&` and `|`, and chained `->` or `<->`.
    Unterminated { position: usize },

    /// A complete formula was read, though some input remains.
    Trailing { position: usize },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { position } => write!(f, "expected a formula at {position}"),
            Self::UnknownToken { position, found } => {
                write!(f, "unknown token '{found}' at {position}")
            }
            Self::Unterminated { position } => write!(f, "expected ')' at {position}"),
            Self::Trailing { position } => write!(f, "unexpected input after formula at {position}"),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors from a formula which exceeds some configured bound.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResourceError {
    /// The nesting depth of a formula exceeds the configured limit.
    DepthExceeded { limit: usize },

    /// There are more atoms than may be represented by an integer literal.
    AtomsExhausted,
}

impl std::fmt::Display for ResourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepthExceeded { limit } => {
                write!(f, "the formula is nested deeper than the limit of {limit}")
            }
            Self::AtomsExhausted => write!(f, "too many atoms for an integer literal"),
        }
    }
}

impl From<ResourceError> for ErrorKind {
    fn from(e: ResourceError) -> Self {
        ErrorKind::Resource(e)
    }
}

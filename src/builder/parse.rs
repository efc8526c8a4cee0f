use std::str::FromStr;

use crate::{
    config::{self, DEFAULT_DEPTH_LIMIT},
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self, ErrorKind},
};

/// Reads a formula from `text`, with the default depth limit.
pub fn parse(text: &str) -> Result<Formula, ErrorKind> {
    parse_with_depth_limit(text, DEFAULT_DEPTH_LIMIT)
}

/// Reads a formula from `text`, failing if parentheses and negations are nested deeper than `depth_limit`.
///
/// A `depth_limit` above [MAX_DEPTH_LIMIT](crate::config::MAX_DEPTH_LIMIT) is read as the maximum.
pub fn parse_with_depth_limit(text: &str, depth_limit: usize) -> Result<Formula, ErrorKind> {
    let mut parser = Parser {
        text,
        position: 0,
        depth: 0,
        depth_limit: config::effective_depth_limit(depth_limit),
    };

    let formula = parser.formula()?;

    parser.skip_whitespace();
    if parser.position < text.len() {
        return Err(ErrorKind::from(err::ParseError::Trailing {
            position: parser.position,
        }));
    }

    log::trace!(target: targets::PARSE, "Parsed {formula} from '{text}'");
    Ok(formula)
}

impl FromStr for Formula {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// The binary operators which may follow the first formula of a parenthesised expression.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Operator {
    And,
    Or,
    Implies,
    Equivalent,
}

impl Operator {
    fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
            Self::Equivalent => "<->",
        }
    }
}

struct Parser<'t> {
    text: &'t str,

    /// The byte offset of the next unread character.
    position: usize,

    /// The count of parentheses and negations currently open.
    depth: usize,

    depth_limit: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.text[self.position..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            match c.is_ascii_whitespace() {
                true => self.position += 1,
                false => break,
            }
        }
    }

    fn unknown_token(&self) -> ErrorKind {
        match self.peek() {
            Some(found) => ErrorKind::from(err::ParseError::UnknownToken {
                position: self.position,
                found,
            }),
            None => ErrorKind::from(err::ParseError::Empty {
                position: self.position,
            }),
        }
    }

    fn descend(&mut self) -> Result<(), ErrorKind> {
        self.depth += 1;
        match self.depth > self.depth_limit {
            true => Err(ErrorKind::from(err::ResourceError::DepthExceeded {
                limit: self.depth_limit,
            })),
            false => Ok(()),
        }
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    /// Formula := Atom | "~" Formula | "(" Expr ")"
    fn formula(&mut self) -> Result<Formula, ErrorKind> {
        self.skip_whitespace();

        match self.peek() {
            None => Err(ErrorKind::from(err::ParseError::Empty {
                position: self.position,
            })),

            Some(c) if c.is_ascii_alphabetic() => Ok(self.atom()),

            Some('~') => {
                self.position += 1;
                self.descend()?;
                let child = self.formula()?;
                self.ascend();
                Ok(Formula::negation(child))
            }

            Some('(') => {
                self.position += 1;
                self.descend()?;
                let expression = self.expression()?;
                self.ascend();
                Ok(expression)
            }

            Some(_) => Err(self.unknown_token()),
        }
    }

    /// Atom := Letter Digit*
    fn atom(&mut self) -> Formula {
        let start = self.position;
        self.position += 1;
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.position += 1;
        }
        Formula::atom(&self.text[start..self.position])
    }

    /// The operator at the current position, if any, without consuming the operator.
    fn operator(&self) -> Option<Operator> {
        let rest = &self.text[self.position..];
        [
            Operator::And,
            Operator::Or,
            Operator::Implies,
            Operator::Equivalent,
        ]
        .into_iter()
        .find(|operator| rest.starts_with(operator.symbol()))
    }

    /// Expr, and the closing parenthesis.
    fn expression(&mut self) -> Result<Formula, ErrorKind> {
        let first = self.formula()?;
        self.skip_whitespace();

        let operator = match self.peek() {
            Some(')') => {
                self.position += 1;
                return Ok(first);
            }

            None => {
                return Err(ErrorKind::from(err::ParseError::Unterminated {
                    position: self.position,
                }))
            }

            Some(_) => match self.operator() {
                Some(operator) => operator,
                None => return Err(self.unknown_token()),
            },
        };

        let formula = match operator {
            Operator::And | Operator::Or => {
                let mut operands = vec![first];
                while self.operator() == Some(operator) {
                    self.position += operator.symbol().len();
                    operands.push(self.formula()?);
                    self.skip_whitespace();
                }
                match operator {
                    Operator::And => Formula::and(operands),
                    _ => Formula::or(operands),
                }
            }

            Operator::Implies => {
                self.position += operator.symbol().len();
                Formula::implies(first, self.formula()?)
            }

            Operator::Equivalent => {
                self.position += operator.symbol().len();
                Formula::equivalent(first, self.formula()?)
            }
        };

        self.close()?;
        Ok(formula)
    }

    fn close(&mut self) -> Result<(), ErrorKind> {
        self.skip_whitespace();
        match self.peek() {
            Some(')') => {
                self.position += 1;
                Ok(())
            }

            Some(_) if self.operator().is_none() => Err(self.unknown_token()),

            _ => Err(ErrorKind::from(err::ParseError::Unterminated {
                position: self.position,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MAX_DEPTH_LIMIT,
        types::err::{ParseError, ResourceError},
    };

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn atoms() {
        assert_eq!(parse("x1"), Ok(atom("x1")));
        assert_eq!(parse("c23"), Ok(atom("c23")));
        assert_eq!(parse("(x1)"), Ok(atom("x1")));
    }

    #[test]
    fn operators() {
        assert_eq!(
            parse("(a->b)"),
            Ok(Formula::implies(atom("a"), atom("b")))
        );
        assert_eq!(
            parse("(a<->~b)"),
            Ok(Formula::equivalent(atom("a"), Formula::negation(atom("b"))))
        );
        assert_eq!(
            parse("(a|b|c)"),
            Ok(Formula::Or(vec![atom("a"), atom("b"), atom("c")]))
        );
    }

    #[test]
    fn chains_splice_on_either_side() {
        let flat = Formula::And(vec![atom("a"), atom("b"), atom("c")]);
        assert_eq!(parse("(a&(b&c))"), Ok(flat.clone()));
        assert_eq!(parse("((a&b)&c)"), Ok(flat));
    }

    #[test]
    fn whitespace() {
        assert_eq!(parse(" ( a -> ~ b ) "), parse("(a->~b)"));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(""),
            Err(ErrorKind::from(ParseError::Empty { position: 0 }))
        );
        assert_eq!(
            parse("(a&"),
            Err(ErrorKind::from(ParseError::Empty { position: 3 }))
        );
        assert_eq!(
            parse("(a&b"),
            Err(ErrorKind::from(ParseError::Unterminated { position: 4 }))
        );
        assert_eq!(
            parse("(a&b|c)"),
            Err(ErrorKind::from(ParseError::Unterminated { position: 4 }))
        );
        assert_eq!(
            parse("(a->b->c)"),
            Err(ErrorKind::from(ParseError::Unterminated { position: 5 }))
        );
        assert_eq!(
            parse("(a#b)"),
            Err(ErrorKind::from(ParseError::UnknownToken {
                position: 2,
                found: '#'
            }))
        );
        assert_eq!(
            parse("(a&b))"),
            Err(ErrorKind::from(ParseError::Trailing { position: 5 }))
        );
        assert_eq!(
            parse("-a"),
            Err(ErrorKind::from(ParseError::UnknownToken {
                position: 0,
                found: '-'
            }))
        );
    }

    #[test]
    fn depth_limit() {
        let deep = format!("{}a", "~".repeat(10));
        assert!(parse_with_depth_limit(&deep, 10).is_ok());
        assert_eq!(
            parse_with_depth_limit(&deep, 9),
            Err(ErrorKind::from(ResourceError::DepthExceeded { limit: 9 }))
        );

        let past_ceiling = format!("{}a", "~".repeat(MAX_DEPTH_LIMIT + 1));
        assert_eq!(
            parse_with_depth_limit(&past_ceiling, usize::MAX),
            Err(ErrorKind::from(ResourceError::DepthExceeded {
                limit: MAX_DEPTH_LIMIT
            }))
        );

        let very_deep = format!("{}a{}", "(".repeat(100_000), ")".repeat(100_000));
        assert!(matches!(
            parse(&very_deep),
            Err(ErrorKind::Resource(ResourceError::DepthExceeded { .. }))
        ));
    }
}

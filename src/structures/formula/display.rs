//! The canonical string representation of a formula.
//!
//! Every conjunction, disjunction, implication, and equivalence is parenthesised, and negation prefixes `~`.
//! A formula whose representation would not begin with a parenthesis is wrapped in parentheses when written at the top level, so `x1` is written `(x1)`, while as a subformula it is written `x1`.
//!
//! The representation is read back by the [parser](crate::builder) to the same formula, up to the order of chains.

use super::Formula;

impl Formula {
    fn write(&self, f: &mut std::fmt::Formatter<'_>, top_level: bool) -> std::fmt::Result {
        match self {
            Formula::Atom(name) => match top_level {
                true => write!(f, "({name})"),
                false => write!(f, "{name}"),
            },

            Formula::Negation(child) => {
                if top_level {
                    write!(f, "(")?;
                }
                write!(f, "~")?;
                child.write(f, false)?;
                if top_level {
                    write!(f, ")")?;
                }
                Ok(())
            }

            Formula::And(children) | Formula::Or(children) => {
                let operator = self.operator().unwrap_or_default();
                write!(f, "(")?;
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{operator}")?;
                    }
                    child.write(f, false)?;
                }
                write!(f, ")")
            }

            Formula::Implies(left, right) | Formula::Equivalent(left, right) => {
                let operator = self.operator().unwrap_or_default();
                write!(f, "(")?;
                left.write(f, false)?;
                write!(f, "{operator}")?;
                right.write(f, false)?;
                write!(f, ")")
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write(f, true)
    }
}

#[cfg(test)]
mod tests {
    use crate::structures::formula::Formula;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn top_level_literals() {
        assert_eq!(atom("x1").to_string(), "(x1)");
        assert_eq!(Formula::negation(atom("x1")).to_string(), "(~x1)");
    }

    #[test]
    fn nested() {
        let formula = Formula::or([
            Formula::negation(atom("e")),
            Formula::negation(Formula::implies(atom("a"), atom("b"))),
            Formula::equivalent(atom("b"), Formula::negation(atom("a"))),
        ]);
        assert_eq!(formula.to_string(), "(~e|~(a->b)|(b<->~a))");
    }

    #[test]
    fn double_negation() {
        let formula = Formula::negation(Formula::negation(atom("a")));
        assert_eq!(formula.to_string(), "(~~a)");
    }
}

/*!
Clauses, read from a formula in conjunctive normal form.

A formula in conjunctive normal form is one of:
- A literal, read as a single unit clause.
- A flat disjunction, read as a single clause.
- A conjunction whose children are literals or flat disjunctions, read as one clause for each child.

Reading is structural, and no clause is simplified.
So, duplicate literals, duplicate clauses, and tautologies are kept.

```rust
# use otter_cnf::structures::{clause::Clause, formula::Formula};
let formula: Formula = "(a&(~b|c))".parse().unwrap();
let clauses = formula.clauses().unwrap();

assert_eq!(clauses.len(), 2);
assert_eq!(clauses[1].as_string(), "~b c");
```

In the other direction, [from_clauses](Formula::from_clauses) rebuilds a formula from clauses.
*/

use crate::{
    misc::log::targets::{self},
    structures::{clause::NamedClause, formula::Formula, literal::NamedLiteral},
    types::err::ClauseError,
};

impl Formula {
    /// The clauses of a formula in conjunctive normal form.
    ///
    /// Fails if the formula is not in conjunctive normal form.
    pub fn clauses(&self) -> Result<Vec<NamedClause>, ClauseError> {
        let clauses = match self {
            Formula::And(children) if children.is_empty() => return Err(ClauseError::NotCNF),

            Formula::And(children) => children
                .iter()
                .map(Self::clause)
                .collect::<Result<Vec<_>, _>>()?,

            _ => vec![self.clause()?],
        };

        log::trace!(target: targets::CLAUSES, "Read {} clauses from {self}", clauses.len());
        Ok(clauses)
    }

    /// The clause of a literal or a flat disjunction.
    fn clause(&self) -> Result<NamedClause, ClauseError> {
        match self {
            Formula::Or(children) if children.is_empty() => Err(ClauseError::NotCNF),

            Formula::Or(children) => children.iter().map(NamedLiteral::try_from).collect(),

            _ => Ok(vec![NamedLiteral::try_from(self)?]),
        }
    }

    /// The conjunction of the disjunctions of `clauses`.
    ///
    /// None if there are no clauses, or if some clause is empty.
    pub fn from_clauses(clauses: &[NamedClause]) -> Option<Formula> {
        let mut conjuncts = Vec::with_capacity(clauses.len());
        for clause in clauses {
            conjuncts.push(Formula::try_or(clause.iter().map(Formula::from))?);
        }
        Formula::try_and(conjuncts)
    }
}

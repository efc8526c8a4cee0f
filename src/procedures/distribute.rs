/*!
Conjunctive normal form, by distribution.

A formula in negation normal form is put in conjunctive normal form by repeated application of the distributive law:

```text
(a | (b & c)) ≡ ((a | b) & (a | c))
```

In detail, for a disjunction which is not flat (i.e. which has some conjunction as a child), one conjunction is isolated.
For each conjunct of the isolated conjunction a fresh disjunction is built from the conjunct together with every other child of the disjunction, and distribution applies to each fresh disjunction in turn.
The results are then conjoined.
A conjunction is in conjunctive normal form once each of its children is.

The result is a literal, a flat disjunction, or a conjunction of literals and flat disjunctions, and so may be read as a [collection of clauses](crate::procedures::clauses).

<div class="warning">
The size of the result may be exponential in the size of the input formula.
For example, a chain of n equivalences results in at least 2<sup>n</sup> clauses.
Distribution is kept for comparison with, and as a step of, the [Tseitin transformation](crate::procedures::tseitin), which applies distribution only to formulas of bounded size.
</div>

```rust
# use otter_cnf::structures::formula::Formula;
let formula: Formula = "(a|(b&c))".parse().unwrap();
let cnf = formula.distribute();

assert_eq!(cnf.to_string(), "((a|b)&(a|c))");
```
*/

use crate::{misc::log::targets::{self}, structures::formula::Formula};

impl Formula {
    /// The formula in conjunctive normal form, by distribution.
    ///
    /// The formula is expected to be in negation normal form, and is put in negation normal form if not.
    pub fn distribute(&self) -> Formula {
        if !self.is_nnf() {
            return self.to_nnf().distribute();
        }
        let cnf = self.distribute_nnf();
        log::trace!(target: targets::DISTRIBUTION, "{self} in CNF: {cnf}");
        cnf
    }

    fn distribute_nnf(&self) -> Formula {
        match self {
            _ if self.is_flat() => self.clone(),

            Formula::And(children) => Formula::and(children.iter().map(Self::distribute_nnf)),

            Formula::Or(children) => {
                distribute_disjunction(children.iter().map(Self::distribute_nnf).collect())
            }

            // A formula in NNF which is not flat is a chain, so this is unreachable.
            _ => self.clone(),
        }
    }
}

/// Distributes the disjunction of `children` over any conjunction among the children.
///
/// Each child is expected to be in conjunctive normal form.
fn distribute_disjunction(children: Vec<Formula>) -> Formula {
    let disjunction = Formula::or(children);
    let Formula::Or(children) = disjunction else {
        return disjunction;
    };

    let mut isolated = None;
    let mut others = Vec::with_capacity(children.len());
    for child in children {
        match child {
            Formula::And(conjuncts) if isolated.is_none() => isolated = Some(conjuncts),
            other => others.push(other),
        }
    }

    let Some(conjuncts) = isolated else {
        // Every child is a literal.
        return Formula::Or(others);
    };

    log::trace!(target: targets::DISTRIBUTION, "Distributing over {} conjuncts", conjuncts.len());

    Formula::and(conjuncts.into_iter().map(|conjunct| {
        let mut disjunction = others.clone();
        disjunction.push(conjunct);
        distribute_disjunction(disjunction)
    }))
}

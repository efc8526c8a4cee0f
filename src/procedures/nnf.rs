/*!
Negation normal form.

A formula is in negation normal form when negation applies only to atoms, and the only other connectives are conjunction and disjunction.

A formula is put in negation normal form in two steps, each of which returns a fresh formula with flat chains:
1. [Eliminate](Formula::without_implications) implications and equivalences:
   - `(a->b)` is rewritten to `(~a|b)`.
   - `(a<->b)` is rewritten to `((~a|b)&(~b|a))`.
2. [Push negations](Formula::with_negations_pushed) to atoms:
   - `~(a&b&…)` is rewritten to `(~a|~b|…)`.
   - `~(a|b|…)` is rewritten to `(~a&~b&…)`.
   - `~~a` is rewritten to `a`, for any number of double negations.

```rust
# use otter_cnf::structures::formula::Formula;
let formula: Formula = "~(a->(b|~~c))".parse().unwrap();
let nnf = formula.to_nnf();

assert!(nnf.is_nnf());
assert_eq!(nnf.to_string(), "(a&~b&~c)");
```
*/

use crate::{misc::log::targets::{self}, structures::formula::Formula};

impl Formula {
    /// The formula in negation normal form.
    pub fn to_nnf(&self) -> Formula {
        let nnf = self.without_implications().with_negations_pushed();
        log::trace!(target: targets::NNF, "{self} in NNF: {nnf}");
        nnf
    }

    /// The formula with each implication and equivalence rewritten in terms of negation, conjunction, and disjunction.
    pub fn without_implications(&self) -> Formula {
        match self {
            Formula::Atom(_) => self.clone(),

            Formula::Negation(child) => Formula::negation(child.without_implications()),

            Formula::And(children) => Formula::and(children.iter().map(Self::without_implications)),

            Formula::Or(children) => Formula::or(children.iter().map(Self::without_implications)),

            Formula::Implies(antecedent, consequent) => {
                let antecedent = antecedent.without_implications();
                let consequent = consequent.without_implications();
                Formula::or([Formula::negation(antecedent), consequent])
            }

            Formula::Equivalent(left, right) => {
                let left = left.without_implications();
                let right = right.without_implications();
                Formula::and([
                    Formula::or([Formula::negation(left.clone()), right.clone()]),
                    Formula::or([Formula::negation(right), left]),
                ])
            }
        }
    }

    /// The formula with each negation pushed to an atom.
    ///
    /// Any implication or equivalence is eliminated on the way.
    pub fn with_negations_pushed(&self) -> Formula {
        match self {
            Formula::Atom(_) => self.clone(),

            Formula::Negation(child) => child.negated_nnf(),

            Formula::And(children) => Formula::and(children.iter().map(Self::with_negations_pushed)),

            Formula::Or(children) => Formula::or(children.iter().map(Self::with_negations_pushed)),

            Formula::Implies(_, _) | Formula::Equivalent(_, _) => {
                self.without_implications().with_negations_pushed()
            }
        }
    }

    /// The negation of the formula, in negation normal form.
    fn negated_nnf(&self) -> Formula {
        match self {
            Formula::Atom(_) => Formula::negation(self.clone()),

            Formula::Negation(child) => child.with_negations_pushed(),

            Formula::And(children) => Formula::or(children.iter().map(Self::negated_nnf)),

            Formula::Or(children) => Formula::and(children.iter().map(Self::negated_nnf)),

            Formula::Implies(_, _) | Formula::Equivalent(_, _) => {
                self.without_implications().negated_nnf()
            }
        }
    }
}

/*!
Formulas, as trees over [atoms](crate::structures::atom).

A [Formula] is one of:
- An atom, e.g. `x1`.
- The negation of a formula, e.g. `~x1`.
- A conjunction or disjunction of one or more formulas, e.g. `(x1&x2&x3)` or `(x1|~x2)`.
- An implication or an equivalence between two formulas, e.g. `(x1->x2)` or `(x1<->x2)`.

Conjunctions and disjunctions are *chains*, and no chain directly contains a chain of the same kind.
The constructors [and](Formula::and) and [or](Formula::or), together with [push_child](Formula::push_child), maintain this invariant by splicing the children of a chain of the same kind in place of the chain.

```rust
# use otter_cnf::structures::formula::Formula;
let a = Formula::atom("a");
let b = Formula::atom("b");
let c = Formula::atom("c");

let formula = Formula::and([a, Formula::and([b, c])]);
assert_eq!(formula.to_string(), "(a&b&c)");
```

The order of children in a chain is kept, though no procedure promises to preserve the order of an input formula.
So, comparison of formulas after some procedure should be made with [same_up_to_order](Formula::same_up_to_order).

Formulas are never mutated by a procedure, and each procedure returns a fresh formula.
*/

mod display;

use std::collections::HashSet;

/// A propositional formula.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Formula {
    /// An atom, by name.
    Atom(String),

    /// The negation of a formula.
    Negation(Box<Formula>),

    /// A conjunction of (at least one) formulas, none of which is a conjunction.
    And(Vec<Formula>),

    /// A disjunction of (at least one) formulas, none of which is a disjunction.
    Or(Vec<Formula>),

    /// An implication, from the antecedent to the consequent.
    Implies(Box<Formula>, Box<Formula>),

    /// An equivalence.
    Equivalent(Box<Formula>, Box<Formula>),
}

/// Extends `chain` with `child`, splicing the children of `child` if `child` is a chain of the same kind.
fn extend_chain(chain: &mut Vec<Formula>, child: Formula, conjunction: bool) {
    match child {
        Formula::And(grandchildren) if conjunction => chain.extend(grandchildren),
        Formula::Or(grandchildren) if !conjunction => chain.extend(grandchildren),
        other => chain.push(other),
    }
}

impl Formula {
    pub fn atom(name: impl Into<String>) -> Self {
        Formula::Atom(name.into())
    }

    pub fn negation(formula: Formula) -> Self {
        Formula::Negation(Box::new(formula))
    }

    /// The conjunction of `children`, with any conjunction among `children` spliced in place.
    ///
    /// # Panics
    /// If the conjunction would be empty. See [try_and](Formula::try_and) for a checked variant.
    pub fn and(children: impl IntoIterator<Item = Formula>) -> Self {
        match Self::try_and(children) {
            Some(conjunction) => conjunction,
            None => panic!("An empty conjunction"),
        }
    }

    /// The disjunction of `children`, with any disjunction among `children` spliced in place.
    ///
    /// # Panics
    /// If the disjunction would be empty. See [try_or](Formula::try_or) for a checked variant.
    pub fn or(children: impl IntoIterator<Item = Formula>) -> Self {
        match Self::try_or(children) {
            Some(disjunction) => disjunction,
            None => panic!("An empty disjunction"),
        }
    }

    /// The conjunction of `children`, or None if the conjunction would be empty.
    pub fn try_and(children: impl IntoIterator<Item = Formula>) -> Option<Self> {
        let mut chain = Vec::default();
        for child in children {
            extend_chain(&mut chain, child, true);
        }
        match chain.is_empty() {
            true => None,
            false => Some(Formula::And(chain)),
        }
    }

    /// The disjunction of `children`, or None if the disjunction would be empty.
    pub fn try_or(children: impl IntoIterator<Item = Formula>) -> Option<Self> {
        let mut chain = Vec::default();
        for child in children {
            extend_chain(&mut chain, child, false);
        }
        match chain.is_empty() {
            true => None,
            false => Some(Formula::Or(chain)),
        }
    }

    pub fn implies(antecedent: Formula, consequent: Formula) -> Self {
        Formula::Implies(Box::new(antecedent), Box::new(consequent))
    }

    pub fn equivalent(left: Formula, right: Formula) -> Self {
        Formula::Equivalent(Box::new(left), Box::new(right))
    }

    /// Attaches `child` to a conjunction or disjunction, splicing the children of `child` if it is a chain of the same kind.
    ///
    /// If the formula is not a conjunction or disjunction `child` is returned as an error.
    pub fn push_child(&mut self, child: Formula) -> Result<(), Formula> {
        match self {
            Formula::And(chain) => extend_chain(chain, child, true),
            Formula::Or(chain) => extend_chain(chain, child, false),
            _ => return Err(child),
        }
        Ok(())
    }

    /// The (immediate) children of the formula, in order.
    pub fn children(&self) -> Vec<&Formula> {
        match self {
            Formula::Atom(_) => Vec::default(),
            Formula::Negation(child) => vec![child.as_ref()],
            Formula::And(children) | Formula::Or(children) => children.iter().collect(),
            Formula::Implies(left, right) | Formula::Equivalent(left, right) => {
                vec![left.as_ref(), right.as_ref()]
            }
        }
    }

    /// The symbol of the main operator of the formula, if the formula is not an atom.
    pub fn operator(&self) -> Option<&'static str> {
        match self {
            Formula::Atom(_) => None,
            Formula::Negation(_) => Some("~"),
            Formula::And(_) => Some("&"),
            Formula::Or(_) => Some("|"),
            Formula::Implies(_, _) => Some("->"),
            Formula::Equivalent(_, _) => Some("<->"),
        }
    }

    /// Whether the formula is a literal: an atom, or the negation of an atom.
    pub fn is_literal(&self) -> bool {
        match self {
            Formula::Atom(_) => true,
            Formula::Negation(child) => matches!(child.as_ref(), Formula::Atom(_)),
            _ => false,
        }
    }

    /// Whether every child of the formula is a literal.
    pub fn is_flat(&self) -> bool {
        self.children().iter().all(|child| child.is_literal())
    }

    /// An iterator over all subformulas of the formula (including the formula), in pre-order.
    pub fn subformulas(&self) -> Subformulas<'_> {
        Subformulas { stack: vec![self] }
    }

    /// The distinct atoms of the formula, in order of first appearance.
    ///
    /// ```rust
    /// # use otter_cnf::structures::formula::Formula;
    /// let formula: Formula = "(b|(a&~b)|c)".parse().unwrap();
    /// assert_eq!(formula.atoms(), vec!["b", "a", "c"]);
    /// ```
    pub fn atoms(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut atoms = Vec::default();
        for subformula in self.subformulas() {
            if let Formula::Atom(name) = subformula {
                if seen.insert(name.as_str()) {
                    atoms.push(name.clone());
                }
            }
        }
        atoms
    }

    /// The number of subformulas of the formula.
    pub fn size(&self) -> usize {
        self.subformulas().count()
    }

    /// The nesting depth of the formula, where an atom has depth 1.
    ///
    /// Computed without recursion, and so safe to call on a formula of any depth.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((formula, depth)) = stack.pop() {
            deepest = std::cmp::max(deepest, depth);
            stack.extend(formula.children().into_iter().map(|child| (child, depth + 1)));
        }
        deepest
    }

    /// Whether no conjunction has a conjunction as a child, and no disjunction has a disjunction as a child.
    pub fn is_chain_flat(&self) -> bool {
        self.subformulas().all(|subformula| match subformula {
            Formula::And(children) => !children.iter().any(|c| matches!(c, Formula::And(_))),
            Formula::Or(children) => !children.iter().any(|c| matches!(c, Formula::Or(_))),
            _ => true,
        })
    }

    /// Whether the formula is in negation normal form.
    ///
    /// That is, the formula contains only atoms, negations of atoms, conjunctions, and disjunctions.
    pub fn is_nnf(&self) -> bool {
        self.subformulas().all(|subformula| match subformula {
            Formula::Atom(_) | Formula::And(_) | Formula::Or(_) => true,
            Formula::Negation(child) => matches!(child.as_ref(), Formula::Atom(_)),
            Formula::Implies(_, _) | Formula::Equivalent(_, _) => false,
        })
    }

    /// Whether the formula and `other` are the same, treating the children of conjunctions and disjunctions as multisets.
    pub fn same_up_to_order(&self, other: &Formula) -> bool {
        match (self, other) {
            (Formula::Atom(a), Formula::Atom(b)) => a == b,

            (Formula::Negation(a), Formula::Negation(b)) => a.same_up_to_order(b),

            (Formula::Implies(a_l, a_r), Formula::Implies(b_l, b_r))
            | (Formula::Equivalent(a_l, a_r), Formula::Equivalent(b_l, b_r)) => {
                a_l.same_up_to_order(b_l) && a_r.same_up_to_order(b_r)
            }

            (Formula::And(a), Formula::And(b)) | (Formula::Or(a), Formula::Or(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                let mut matched = vec![false; b.len()];
                'child_loop: for a_child in a {
                    for (index, b_child) in b.iter().enumerate() {
                        if !matched[index] && a_child.same_up_to_order(b_child) {
                            matched[index] = true;
                            continue 'child_loop;
                        }
                    }
                    return false;
                }
                true
            }

            _ => false,
        }
    }
}

/// A pre-order iterator over the subformulas of a formula.
pub struct Subformulas<'f> {
    stack: Vec<&'f Formula>,
}

impl<'f> Iterator for Subformulas<'f> {
    type Item = &'f Formula;

    fn next(&mut self) -> Option<Self::Item> {
        let formula = self.stack.pop()?;
        match formula {
            Formula::Atom(_) => {}
            Formula::Negation(child) => self.stack.push(child),
            Formula::And(children) | Formula::Or(children) => self.stack.extend(children.iter().rev()),
            Formula::Implies(left, right) | Formula::Equivalent(left, right) => {
                self.stack.push(right);
                self.stack.push(left);
            }
        }
        Some(formula)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str) -> Formula {
        Formula::atom(name)
    }

    #[test]
    fn chains_splice() {
        let inner = Formula::or([atom("b"), atom("c")]);
        let formula = Formula::or([atom("a"), inner, atom("d")]);
        assert_eq!(
            formula,
            Formula::Or(vec![atom("a"), atom("b"), atom("c"), atom("d")])
        );
        assert!(formula.is_chain_flat());
    }

    #[test]
    fn chains_of_other_kinds_nest() {
        let inner = Formula::and([atom("b"), atom("c")]);
        let formula = Formula::or([atom("a"), inner.clone()]);
        assert_eq!(formula, Formula::Or(vec![atom("a"), inner]));
    }

    #[test]
    fn empty_chains() {
        assert_eq!(Formula::try_and(Vec::<Formula>::new()), None);
        assert_eq!(Formula::try_or(Vec::<Formula>::new()), None);
        assert_eq!(Formula::try_and([Formula::And(Vec::new())]), None);
        assert_eq!(Formula::try_or([atom("a")]), Some(Formula::Or(vec![atom("a")])));
    }

    #[test]
    #[should_panic(expected = "An empty conjunction")]
    fn empty_conjunction() {
        Formula::and(Vec::<Formula>::new());
    }

    #[test]
    #[should_panic(expected = "An empty disjunction")]
    fn empty_disjunction() {
        Formula::or(std::iter::empty::<Formula>());
    }

    #[test]
    fn push_child_splices() {
        let mut formula = Formula::and([atom("a"), atom("b")]);
        assert!(formula.push_child(Formula::and([atom("c"), atom("d")])).is_ok());
        assert_eq!(formula.children().len(), 4);

        let mut not_a_chain = Formula::negation(atom("a"));
        assert_eq!(not_a_chain.push_child(atom("b")), Err(atom("b")));
    }

    #[test]
    fn literals_and_flatness() {
        assert!(atom("a").is_literal());
        assert!(Formula::negation(atom("a")).is_literal());
        assert!(!Formula::negation(Formula::negation(atom("a"))).is_literal());

        let flat = Formula::or([atom("a"), Formula::negation(atom("b"))]);
        assert!(flat.is_flat());
        assert!(!Formula::and([flat, atom("c")]).is_flat());
    }

    #[test]
    fn depth_and_size() {
        let formula = Formula::implies(atom("a"), Formula::negation(atom("b")));
        assert_eq!(formula.depth(), 3);
        assert_eq!(formula.size(), 4);
        assert_eq!(atom("a").depth(), 1);
    }

    #[test]
    fn deep_depth_without_overflow() {
        let mut formula = atom("a");
        for _ in 0..100_000 {
            formula = Formula::Negation(Box::new(formula));
        }
        assert_eq!(formula.depth(), 100_001);
        // Avoid a recursive drop of the chain of negations.
        let mut current = formula;
        while let Formula::Negation(child) = current {
            current = *child;
        }
    }

    #[test]
    fn order_insensitive_comparison() {
        let ab = Formula::and([atom("a"), Formula::or([atom("b"), atom("c")])]);
        let ba = Formula::and([Formula::or([atom("c"), atom("b")]), atom("a")]);
        assert!(ab.same_up_to_order(&ba));
        assert_ne!(ab, ba);

        let ab_ab = Formula::and([atom("a"), atom("a"), atom("b")]);
        let ab_bb = Formula::and([atom("a"), atom("b"), atom("b")]);
        assert!(!ab_ab.same_up_to_order(&ab_bb));

        let imp = Formula::implies(atom("a"), atom("b"));
        let pmi = Formula::implies(atom("b"), atom("a"));
        assert!(!imp.same_up_to_order(&pmi));
    }

    #[test]
    fn nnf_check() {
        let nnf = Formula::or([Formula::negation(atom("a")), atom("b")]);
        assert!(nnf.is_nnf());
        assert!(!Formula::negation(nnf.clone()).is_nnf());
        assert!(!Formula::implies(atom("a"), atom("b")).is_nnf());
    }
}

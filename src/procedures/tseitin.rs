/*!
The Tseitin transformation.

The transformation introduces a fresh auxiliary atom for each subformula which is not a literal, and defines the auxiliary atom to be equivalent to its subformula, with the children of the subformula replaced by their auxiliary atoms.
The result is equisatisfiable with the input formula, and of size linear in the size of the input formula.

In detail:
- Auxiliary atoms are named `p0`, `p1`, `p2`, … in order of allocation, and `p0` stands for the input formula.
- For each auxiliary atom *v* standing for a subformula *φ*, the equivalence *v* `<->` *φ'* is emitted, where *φ'* has the same main operator as *φ* and each child of *φ'* is either:
  + The child of *φ*, if the child is a literal.
  + A fresh auxiliary atom, standing for the child of *φ*, otherwise.
- The unit clause `p0` is conjoined with every emitted equivalence, and the conjunction is put in conjunctive normal form by [distribution](crate::procedures::distribute).

As each equivalence has bounded size (relative to the arity of a single connective), distribution of each equivalence is cheap, and the count of clauses is linear in the size of the input formula.

```rust
# use otter_cnf::procedures::tseitin::tseitin;
# use otter_cnf::structures::{clause::Clause, formula::Formula};
let formula: Formula = "x1".parse().unwrap();
let cnf = tseitin(&formula).unwrap();

let clauses = cnf
    .clauses()
    .unwrap()
    .iter()
    .map(|clause| clause.as_string())
    .collect::<Vec<_>>();

assert_eq!(clauses, vec!["p0", "~p0 x1", "~x1 p0"]);
```

# Reserved atoms

As auxiliary atoms are named with the [reserved prefix](crate::structures::atom::AUXILIARY_PREFIX), a formula with an atom whose name begins with the prefix is rejected with a [ConfigError](crate::types::err::ConfigError) before any transformation.

Likewise, as the transformation recurses on the structure of a formula, a formula nested deeper than [MAX_DEPTH_LIMIT](crate::config::MAX_DEPTH_LIMIT) is rejected with a [ResourceError](crate::types::err::ResourceError).
*/

use crate::{
    config::MAX_DEPTH_LIMIT,
    misc::log::targets::{self},
    structures::{atom, formula::Formula},
    types::err::{self, ErrorKind},
};

/// The Tseitin transformation of `formula`, in conjunctive normal form.
pub fn tseitin(formula: &Formula) -> Result<Formula, ErrorKind> {
    if let Some(reserved) = formula.atoms().into_iter().find(|name| atom::is_reserved(name)) {
        log::error!(target: targets::TSEITIN, "The atom {reserved} uses the reserved prefix");
        return Err(ErrorKind::from(err::ConfigError::ReservedPrefix(reserved)));
    }

    if formula.depth().saturating_sub(1) > MAX_DEPTH_LIMIT {
        log::error!(target: targets::TSEITIN, "Formula deeper than {MAX_DEPTH_LIMIT}");
        return Err(ErrorKind::from(err::ResourceError::DepthExceeded {
            limit: MAX_DEPTH_LIMIT,
        }));
    }

    let mut encoder = TseitinEncoder::default();
    let root = encoder.fresh_atom();
    encoder.define(root.clone(), formula);

    log::info!(target: targets::TSEITIN, "{} auxiliary atoms for {formula}", encoder.fresh);

    let definitions = Formula::and(std::iter::once(root).chain(encoder.definitions));
    let cnf = definitions.to_nnf().distribute();

    log::trace!(target: targets::TSEITIN, "Tseitin transformation of {formula}: {cnf}");
    Ok(cnf)
}

/// The state of a single transformation.
///
/// A fresh encoder is used for each transformation, so numbering of auxiliary atoms always begins at `p0`.
#[derive(Default)]
struct TseitinEncoder {
    /// The number of the next auxiliary atom.
    fresh: usize,

    /// Equivalences between auxiliary atoms and their subformulas, in order of emission.
    definitions: Vec<Formula>,
}

impl TseitinEncoder {
    fn fresh_atom(&mut self) -> Formula {
        let name = atom::auxiliary(self.fresh);
        self.fresh += 1;
        Formula::Atom(name)
    }

    /// The child of a definition: either `child` if `child` is a literal, or a fresh atom to stand for `child`.
    ///
    /// Any fresh atom is pushed to `pending` together with the child it stands for.
    fn operand<'f>(&mut self, child: &'f Formula, pending: &mut Vec<(Formula, &'f Formula)>) -> Formula {
        match child.is_literal() {
            true => child.clone(),
            false => {
                let auxiliary = self.fresh_atom();
                pending.push((auxiliary.clone(), child));
                auxiliary
            }
        }
    }

    /// Emits the definition of `auxiliary` as `formula`, and then the definition of any auxiliary atom introduced for some child of `formula`.
    fn define(&mut self, auxiliary: Formula, formula: &Formula) {
        let mut pending = Vec::default();

        let definition = match formula {
            Formula::Atom(_) => formula.clone(),

            Formula::Negation(child) => Formula::negation(self.operand(child, &mut pending)),

            Formula::And(children) | Formula::Or(children) => {
                let mut operands = Vec::with_capacity(children.len());
                for child in children {
                    operands.push(self.operand(child, &mut pending));
                }
                match formula {
                    Formula::And(_) => Formula::And(operands),
                    _ => Formula::Or(operands),
                }
            }

            Formula::Implies(antecedent, consequent) => {
                let antecedent = self.operand(antecedent, &mut pending);
                let consequent = self.operand(consequent, &mut pending);
                Formula::implies(antecedent, consequent)
            }

            Formula::Equivalent(left, right) => {
                let left = self.operand(left, &mut pending);
                let right = self.operand(right, &mut pending);
                Formula::equivalent(left, right)
            }
        };

        log::trace!(target: targets::TSEITIN, "Defined {auxiliary} as {definition}");
        self.definitions.push(Formula::equivalent(auxiliary, definition));

        for (auxiliary, child) in pending {
            self.define(auxiliary, child);
        }
    }
}

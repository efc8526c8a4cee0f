#![allow(dead_code)]

use std::collections::HashMap;

use otter_cnf::{
    procedures::Encoding,
    structures::{
        clause::IntClause,
        formula::Formula,
        literal::{IntLiteral, Literal},
    },
};
use rand::{rngs::StdRng, Rng};

/// Atoms for random formulas, none of which uses the reserved prefix.
pub const ATOMS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// A random formula over `atoms`, nested at most `depth` connectives deep.
pub fn random_formula(rng: &mut StdRng, atoms: &[&str], depth: usize) -> Formula {
    if depth == 0 || rng.random_bool(0.25) {
        return Formula::atom(atoms[rng.random_range(0..atoms.len())]);
    }

    match rng.random_range(0..5) {
        0 => Formula::negation(random_formula(rng, atoms, depth - 1)),

        1 => {
            let count = rng.random_range(2..4);
            Formula::and((0..count).map(|_| random_formula(rng, atoms, depth - 1)))
        }

        2 => {
            let count = rng.random_range(2..4);
            Formula::or((0..count).map(|_| random_formula(rng, atoms, depth - 1)))
        }

        3 => Formula::implies(
            random_formula(rng, atoms, depth - 1),
            random_formula(rng, atoms, depth - 1),
        ),

        _ => Formula::equivalent(
            random_formula(rng, atoms, depth - 1),
            random_formula(rng, atoms, depth - 1),
        ),
    }
}

/// Whether some valuation satisfies every clause, where clauses may mention atoms `1..=atom_count`.
pub fn satisfiable(clauses: &[IntClause], atom_count: usize) -> bool {
    let mut valuation = vec![None; atom_count];
    dpll(clauses, &mut valuation)
}

/// A minimal DPLL search with unit propagation.
///
/// On failure the valuation is restored to its state on entry.
fn dpll(clauses: &[IntClause], valuation: &mut [Option<bool>]) -> bool {
    let mut trail = Vec::default();

    'propagation: loop {
        let mut propagated = false;

        for clause in clauses {
            let mut satisfied = false;
            let mut open = Vec::default();

            for literal in clause {
                let index = literal.atom() as usize - 1;
                match valuation[index] {
                    Some(value) if value == literal.polarity() => {
                        satisfied = true;
                        break;
                    }
                    Some(_) => {}
                    None => open.push(*literal),
                }
            }

            if satisfied {
                continue;
            }

            match open.as_slice() {
                [] => {
                    for index in trail {
                        valuation[index] = None;
                    }
                    return false;
                }

                [unit] => {
                    let index = unit.atom() as usize - 1;
                    valuation[index] = Some(unit.polarity());
                    trail.push(index);
                    propagated = true;
                }

                _ => {}
            }
        }

        if !propagated {
            break 'propagation;
        }
    }

    let Some(index) = valuation.iter().position(Option::is_none) else {
        return true;
    };

    for value in [true, false] {
        valuation[index] = Some(value);
        if dpll(clauses, valuation) {
            return true;
        }
    }

    valuation[index] = None;
    for index in trail {
        valuation[index] = None;
    }
    false
}

/// Whether the clauses of `encoding` are satisfiable once each original atom is fixed to its value on `valuation`.
pub fn satisfiable_extending(encoding: &Encoding, valuation: &HashMap<String, bool>) -> bool {
    let mut clauses = encoding.clauses.clone();

    for (name, value) in valuation {
        if let Some(atom) = encoding.atom_map.atom(name) {
            clauses.push(vec![IntLiteral::new(atom, *value)]);
        }
    }

    satisfiable(&clauses, encoding.atom_count())
}

/// The formula `((…((x1<->x2)<->x3)…)<->x{n+1})`, with `n` equivalences.
pub fn equivalence_chain(n: usize) -> String {
    let mut text = "(x1<->x2)".to_string();
    for index in 3..=n + 1 {
        text = format!("({text}<->x{index})");
    }
    text
}

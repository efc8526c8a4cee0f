/*!
Atoms (aka. 'variables').

External atoms are names, made of a single ASCII letter followed by zero or more ASCII digits. \
Examples: `x`, `c23`, `v3`.

Names beginning with the [AUXILIARY_PREFIX] are reserved for auxiliary atoms introduced by the [Tseitin transformation](crate::procedures::tseitin), and are written `p0`, `p1`, `p2`, etc.

Internally, once an [atom map](crate::db::atom::AtomMap) has been built, an atom is a positive integer.
The atom of a name is one more than the index of the name in the map, so the atom `0` is never used and the sign of an [integer literal](crate::structures::literal::IntLiteral) always determines its polarity.
*/

/// An atom, as a positive integer.
pub type Atom = u32;

/// The prefix of auxiliary atoms.
pub const AUXILIARY_PREFIX: char = 'p';

/// Whether `name` is an atom: a single ASCII letter followed by ASCII digits.
///
/// ```rust
/// # use otter_cnf::structures::atom::is_atom;
/// assert!(is_atom("x763"));
/// assert!(is_atom("c"));
/// assert!(!is_atom("c2c"));
/// assert!(!is_atom("2"));
/// ```
pub fn is_atom(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(letter) if letter.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_digit()),
        _ => false,
    }
}

/// Whether `name` begins with the prefix reserved for auxiliary atoms.
pub fn is_reserved(name: &str) -> bool {
    name.starts_with(AUXILIARY_PREFIX)
}

/// The name of the auxiliary atom with the given number.
pub fn auxiliary(number: usize) -> String {
    format!("{AUXILIARY_PREFIX}{number}")
}

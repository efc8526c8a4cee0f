use std::str::FromStr;

/// Variant orders in which the atoms of a formula are assigned indicies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AtomOrder {
    /// The order in which atoms first appear in a left-to-right reading of the formula.
    FirstAppearance = 0,

    /// The lexicographic order of the names of atoms.
    Lexicographic,
}

impl std::fmt::Display for AtomOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstAppearance => write!(f, "FirstAppearance"),
            Self::Lexicographic => write!(f, "Lexicographic"),
        }
    }
}

impl AtomOrder {
    /// The minimum AtomOrder type.
    pub const MIN: AtomOrder = AtomOrder::FirstAppearance;

    /// The maximum AtomOrder type.
    pub const MAX: AtomOrder = AtomOrder::Lexicographic;
}

impl FromStr for AtomOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FirstAppearance" | "first" => Ok(Self::FirstAppearance),

            "Lexicographic" | "lexicographic" => Ok(Self::Lexicographic),

            _unkown_string => Err(()),
        }
    }
}

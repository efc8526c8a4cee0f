/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [parsing](crate::builder)
    pub const PARSE: &str = "parse";

    /// Logs related to [negation normal form](crate::procedures::nnf)
    pub const NNF: &str = "nnf";

    /// Logs related to [distribution](crate::procedures::distribute)
    pub const DISTRIBUTION: &str = "distribution";

    /// Logs related to the [Tseitin transformation](crate::procedures::tseitin)
    pub const TSEITIN: &str = "tseitin";

    /// Logs related to [clause extraction](crate::procedures::clauses)
    pub const CLAUSES: &str = "clauses";

    /// Logs related to the [atom map](crate::db::atom)
    pub const ATOM_MAP: &str = "atom_map";

    /// Logs related to the [context](crate::context)
    pub const CONTEXT: &str = "context";
}

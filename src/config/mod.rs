/*!
Configuration of a context.

All configuration for a [context](crate::context) is contained within a [Config].
Each option is a [ConfigOption], bounded by some minimum and maximum value.
*/

mod config_option;
pub use config_option::ConfigOption;

mod atom_order;
pub use atom_order::AtomOrder;

/// The default limit on the nesting depth of a formula.
pub const DEFAULT_DEPTH_LIMIT: usize = 512;

/// The greatest limit on the nesting depth of a formula.
///
/// Parsing, normalisation, distribution, and the Tseitin transformation each recurse on the structure of a formula.
/// A formula nested to this depth is handled within the two megabyte stack of a spawned thread.
pub const MAX_DEPTH_LIMIT: usize = 512;

/// `limit`, capped at [MAX_DEPTH_LIMIT].
pub fn effective_depth_limit(limit: usize) -> usize {
    limit.min(MAX_DEPTH_LIMIT)
}

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum nesting depth of a formula accepted by the parser and by the Tseitin transformation.
    ///
    /// Bounded above by [MAX_DEPTH_LIMIT], and a value above the bound written directly to the option is read as the bound.
    pub depth_limit: ConfigOption<usize>,

    /// The order in which atoms of the input formula are assigned indicies.
    pub atom_order: ConfigOption<AtomOrder>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            depth_limit: ConfigOption {
                name: "depth_limit",
                min: 1,
                max: MAX_DEPTH_LIMIT,
                value: DEFAULT_DEPTH_LIMIT,
            },

            atom_order: ConfigOption {
                name: "atom_order",
                min: AtomOrder::MIN,
                max: AtomOrder::MAX,
                value: AtomOrder::FirstAppearance,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_set() {
        let mut config = Config::default();
        assert!(!config.depth_limit.set(0));
        assert_eq!(config.depth_limit.value, DEFAULT_DEPTH_LIMIT);

        assert!(config.depth_limit.set(8));
        assert_eq!(config.depth_limit.value, 8);

        assert!(config.atom_order.set(AtomOrder::Lexicographic));
    }

    #[test]
    fn depth_ceiling() {
        let mut config = Config::default();
        assert!(config.depth_limit.set(MAX_DEPTH_LIMIT));
        assert!(!config.depth_limit.set(MAX_DEPTH_LIMIT + 1));
        assert!(!config.depth_limit.set(10_000_000));
        assert_eq!(config.depth_limit.value, MAX_DEPTH_LIMIT);

        assert_eq!(effective_depth_limit(usize::MAX), MAX_DEPTH_LIMIT);
        assert_eq!(effective_depth_limit(3), 3);
    }

    #[test]
    fn order_from_str() {
        assert_eq!("first".parse(), Ok(AtomOrder::FirstAppearance));
        assert_eq!("Lexicographic".parse(), Ok(AtomOrder::Lexicographic));
        assert!("random".parse::<AtomOrder>().is_err());
    }
}

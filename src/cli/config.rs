use otter_cnf::config::{AtomOrder, Config};

use crate::Args;

pub enum ConfigError {
    NonSpecific(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::NonSpecific(s) => write!(f, "{s}"),
        }
    }
}

/// Build a [Config] from parsed CLI arguments.
///
/// Each option set is noted with a comment line.
pub(super) fn config_from_args(args: &Args) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if let Some(value) = args.depth_limit {
        let (min, max) = cfg.depth_limit.min_max();
        match cfg.depth_limit.set(value) {
            true => println!("c {} set to: {value}", cfg.depth_limit.name),
            false => {
                return Err(ConfigError::NonSpecific(format!(
                    "{} requires a value between {min} and {max}",
                    cfg.depth_limit.name
                )))
            }
        }
    }

    if let Some(request) = &args.order {
        match request.parse::<AtomOrder>() {
            Ok(value) => {
                cfg.atom_order.value = value;
                println!("c {} set to: {value}", cfg.atom_order.name)
            }
            Err(()) => {
                let (min, max) = cfg.atom_order.min_max();
                return Err(ConfigError::NonSpecific(format!(
                    "{} requires one of {min} or {max}",
                    cfg.atom_order.name
                )));
            }
        }
    }

    Ok(cfg)
}

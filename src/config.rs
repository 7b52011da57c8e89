use std::env;

use crate::error::ConfigError;
use crate::game_state::validate_grid;
use crate::grid::Grid;

/// Service settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub workers: usize,
    /// Board used by `/autopilot` when the request does not name one.
    pub board: Grid,
    pub max_turns: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            workers: num_cpus::get(),
            board: Grid::new(11, 11),
            max_turns: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup, falling back to defaults for
    /// missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();
        let config = Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            workers: positive_or(&lookup, "WORKERS", defaults.workers)?,
            board: Grid::new(
                positive_or(&lookup, "BOARD_WIDTH", defaults.board.width)?,
                positive_or(&lookup, "BOARD_HEIGHT", defaults.board.height)?,
            ),
            max_turns: parse_or(&lookup, "MAX_TURNS", defaults.max_turns)?,
        };
        validate_grid(&config.board)?;
        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|source| ConfigError::InvalidNumber { key, value, source }),
        None => Ok(default),
    }
}

fn positive_or<F>(lookup: &F, key: &'static str, default: usize) -> Result<usize, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match parse_or(lookup, key, default)? {
        0 => Err(ConfigError::Zero { key }),
        value => Ok(value),
    }
}

//! Runtime settings taken from the environment.
//!
//! The command line itself has no flags, so the few knobs the tool has are
//! environment variables:
//!
//! - `BINOMIAL_LOG`: `off`, `error`, `warn` (default), `info`, `debug` or
//!   `trace`
//! - `BINOMIAL_ARITHMETIC`: `wrapping` (default) or `checked`

use log::LevelFilter;

use crate::combinatorics::Arithmetic;
use crate::error::{Error, Result};

pub const LOG_VAR: &str = "BINOMIAL_LOG";
pub const ARITHMETIC_VAR: &str = "BINOMIAL_ARITHMETIC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub arithmetic: Arithmetic,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            arithmetic: Arithmetic::default(),
        }
    }
}

impl Config {
    /// Read the settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the settings through `lookup`. Unset or empty values keep their
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(value) = non_empty(lookup(LOG_VAR)) {
            config.log_level = value.parse().map_err(|_| Error::InvalidSetting {
                key: LOG_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = non_empty(lookup(ARITHMETIC_VAR)) {
            config.arithmetic = value.parse().map_err(|_| Error::InvalidSetting {
                key: ARITHMETIC_VAR,
                value: value.clone(),
            })?;
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

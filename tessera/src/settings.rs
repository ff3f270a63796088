//! Environment-driven settings for Tessera tools

use crate::error::{Error, Result};
use std::env;

pub const LOG_VAR: &str = "TESSERA_LOG";
pub const PRETTY_VAR: &str = "TESSERA_PRETTY";
pub const PLUGIN_NAME_VAR: &str = "TESSERA_PLUGIN_NAME";

const DEFAULT_LOG_FILTER: &str = "warn,tessera=info";
const DEFAULT_PLUGIN_NAME: &str = "sample";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing` filter directive
    pub log_filter: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    pub plugin_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty: true,
            plugin_name: DEFAULT_PLUGIN_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment. `RUST_LOG` is used when
    /// `TESSERA_LOG` is unset.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let log_filter = lookup(LOG_VAR)
            .or_else(|| lookup("RUST_LOG"))
            .unwrap_or(defaults.log_filter);
        let pretty = match lookup(PRETTY_VAR) {
            Some(value) => parse_bool(PRETTY_VAR, &value)?,
            None => defaults.pretty,
        };
        let plugin_name = lookup(PLUGIN_NAME_VAR)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.plugin_name);

        Ok(Self { log_filter, pretty, plugin_name })
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidSetting { var, value: value.to_string() }),
    }
}

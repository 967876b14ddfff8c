use crate::trend::TrendMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const ENV_TREND_MODE: &str = "TALKHEAL_TREND_MODE";
pub const ENV_WINDOW_DAYS: &str = "TALKHEAL_WINDOW_DAYS";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    pub trend_mode: TrendMode,
    pub default_window_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            trend_mode: TrendMode::default(),
            default_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl EngineConfig {
    /// CLI values take precedence over the environment, which takes precedence over defaults.
    pub fn resolve(
        cli_trend_mode: Option<String>,
        cli_window_days: Option<u32>,
        env: &impl Env,
    ) -> Result<Self, ConfigError> {
        let trend_mode = match resolve_optional_string(cli_trend_mode, ENV_TREND_MODE, env) {
            Some(v) => v.parse().map_err(ConfigError::InvalidTrendMode)?,
            None => TrendMode::default(),
        };

        let window_days = match cli_window_days {
            Some(days) => days,
            None => match env.var(ENV_WINDOW_DAYS) {
                Some(v) => v
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidWindowDays(v.clone()))?,
                None => DEFAULT_WINDOW_DAYS,
            },
        };

        Ok(Self {
            trend_mode,
            default_window_days: window_days_nonzero(window_days)?,
        })
    }
}

fn window_days_nonzero(days: u32) -> Result<u32, ConfigError> {
    if days == 0 {
        return Err(ConfigError::ZeroWindowDays);
    }
    Ok(days)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown trend mode: {0} (expected `intensity` or `valence`)")]
    InvalidTrendMode(String),
    #[error("window days must be a positive integer, got {0:?}")]
    InvalidWindowDays(String),
    #[error("window days must be > 0")]
    ZeroWindowDays,
}

pub trait Env {
    fn var(&self, key: &str) -> Option<String>;
}

#[derive(Clone, Debug, Default)]
pub struct StdEnv;

impl Env for StdEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MapEnv {
    vars: std::collections::BTreeMap<String, String>,
}

impl MapEnv {
    pub fn with_var(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl Env for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn resolve_optional_string(
    cli_value: Option<String>,
    env_key: &str,
    env: &impl Env,
) -> Option<String> {
    match cli_value {
        Some(v) => Some(v),
        None => env.var(env_key),
    }
}

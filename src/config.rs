//! Engine configuration.
//!
//! Loaded from an optional YAML file, then overridden from the environment:
//!
//! - `GAME_CONFIG`: path to the YAML file
//! - `GAME_MAX_ROUNDS`: rounds per session
//! - `GAME_SEED`: RNG seed (reproducible sessions)
//! - `GAME_ADVISORY_TIMEOUT_MS`: per-call advisory budget
//! - `GAME_ADVISOR_ENABLED`: `true`/`false`

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::engine::future_value::{DEFAULT_DISCOUNT, DEFAULT_HORIZON};
use crate::engine::pattern::{DEFAULT_VOLATILITY_THRESHOLD, DEFAULT_WINDOW, MIN_SAMPLES};
use crate::error::ConfigError;
use crate::game::payoff::PayoffTable;

/// Settings for the chat-model advisory oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub enabled: bool,
    pub model: String,
    /// OpenAI-compatible base URL; the public endpoint when unset.
    pub base_url: Option<String>,
    /// Environment variable holding the API key.
    pub api_key_env: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: "gpt-4o-mini".to_string(),
            base_url: None,
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Tunables for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub max_rounds: u32,
    pub horizon: u32,
    pub discount: f64,
    pub volatility_threshold: f64,
    pub pattern_window: usize,
    pub advisory_timeout_ms: u64,
    pub seed: Option<u64>,
    /// YAML file with `am`/`mc` matrices replacing the built-in table.
    pub payoff_table: Option<PathBuf>,
    pub advisor: AdvisorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rounds: 10,
            horizon: DEFAULT_HORIZON,
            discount: DEFAULT_DISCOUNT,
            volatility_threshold: DEFAULT_VOLATILITY_THRESHOLD,
            pattern_window: DEFAULT_WINDOW,
            advisory_timeout_ms: 2000,
            seed: None,
            payoff_table: None,
            advisor: AdvisorConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_yaml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&raw)
    }

    /// Defaults, or the file named by `GAME_CONFIG`, with env overrides applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("GAME_CONFIG") {
            Ok(path) => Self::from_yaml_file(path)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from any variable source (the environment in
    /// production, a map in tests).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("GAME_MAX_ROUNDS") {
            self.max_rounds = parse_var("GAME_MAX_ROUNDS", &v)?;
        }
        if let Some(v) = lookup("GAME_SEED") {
            self.seed = Some(parse_var("GAME_SEED", &v)?);
        }
        if let Some(v) = lookup("GAME_ADVISORY_TIMEOUT_MS") {
            self.advisory_timeout_ms = parse_var("GAME_ADVISORY_TIMEOUT_MS", &v)?;
        }
        if let Some(v) = lookup("GAME_ADVISOR_ENABLED") {
            self.advisor.enabled = parse_var("GAME_ADVISOR_ENABLED", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.discount > 0.0 && self.discount <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "discount must be in (0, 1], got {}",
                self.discount
            )));
        }
        if self.horizon == 0 {
            return Err(ConfigError::Validation("horizon must be at least 1".into()));
        }
        if self.pattern_window < MIN_SAMPLES {
            return Err(ConfigError::Validation(format!(
                "pattern_window must be at least {}, got {}",
                MIN_SAMPLES, self.pattern_window
            )));
        }
        if !(self.volatility_threshold > 0.0 && self.volatility_threshold.is_finite()) {
            return Err(ConfigError::Validation(format!(
                "volatility_threshold must be positive, got {}",
                self.volatility_threshold
            )));
        }
        Ok(())
    }

    pub fn advisory_timeout(&self) -> Duration {
        Duration::from_millis(self.advisory_timeout_ms)
    }

    /// The configured payoff table, or the built-in one.
    pub fn load_payoff_table(&self) -> Result<PayoffTable, ConfigError> {
        match &self.payoff_table {
            Some(path) => PayoffTable::from_yaml_file(path),
            None => Ok(PayoffTable::standard()),
        }
    }
}

fn parse_var<T: FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var,
        value: value.to_string(),
    })
}

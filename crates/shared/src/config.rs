//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Expense splitting rules.
    #[serde(default)]
    pub split: SplitSettings,
    /// Currency display settings.
    #[serde(default)]
    pub display: DisplaySettings,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the share sum is compared against the expense total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareSumCheck {
    /// Exact decimal equality. Shares of 100 split three ways are rejected.
    #[default]
    Exact,
    /// Accept sums within `SplitSettings::tolerance` of the total.
    Tolerance,
}

/// How equal and percentage splits treat amounts that do not divide evenly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainderPolicy {
    /// Plain division, no rounding. `100 / 3` yields `33.333...` for each.
    #[default]
    None,
    /// Round to `SplitSettings::decimal_places` and hand leftover units out
    /// so the shares sum exactly to the total.
    LargestRemainder,
}

/// Expense splitting configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SplitSettings {
    /// Share sum comparison mode.
    #[serde(default)]
    pub share_sum_check: ShareSumCheck,
    /// Absolute tolerance used by `ShareSumCheck::Tolerance`.
    #[serde(default = "default_tolerance")]
    pub tolerance: Decimal,
    /// Remainder handling for recomputed splits.
    #[serde(default)]
    pub remainder: RemainderPolicy,
    /// Precision of rounded shares.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for SplitSettings {
    fn default() -> Self {
        Self {
            share_sum_check: ShareSumCheck::default(),
            tolerance: default_tolerance(),
            remainder: RemainderPolicy::default(),
            decimal_places: default_decimal_places(),
        }
    }
}

/// Currency display configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplaySettings {
    /// Symbol prefixed to every amount.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Digits shown after the decimal point.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            decimal_places: default_decimal_places(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "tally=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

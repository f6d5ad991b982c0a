//! # CLI Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PRICEWISE_*`, e.g. `PRICEWISE_CURRENCY_CODE=ILS`)
//! 2. Config file (`pricewise.toml`, or the path in `PRICEWISE_CONFIG`)
//! 3. Defaults (this file)
//!
//! ## Example `pricewise.toml`
//! ```toml
//! currency_code = "ILS"
//! currency_symbol = "₪"
//! country = "IL"
//! city = "Tel Aviv"
//! ```

use std::env;
use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::{Deserialize, Serialize};

use pricewise_core::format::CurrencyFormat;
use pricewise_core::stores::DEFAULT_COUNTRY;
use pricewise_core::validation::validate_currency_code;
use pricewise_core::{ValidationError, DEFAULT_CURRENCY};

use crate::error::CliResult;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PRICEWISE";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_VAR: &str = "PRICEWISE_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "pricewise.toml";

/// Settings for one `pricewise` run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Working currency (ISO 4217). Observations in other currencies are skipped.
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Log filter used when `RUST_LOG` is not set
    pub log_level: String,

    /// Country for the store directory fallback
    pub country: String,

    /// City for the store directory fallback
    #[serde(default)]
    pub city: Option<String>,
}

impl CliConfig {
    /// Loads configuration from defaults, the config file and the environment.
    pub fn load() -> CliResult<Self> {
        let path = env::var(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let builder = Self::defaults()?
            .add_source(File::from(path.as_path()).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true));

        Self::from_builder(builder)
    }

    fn defaults() -> CliResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("currency_code", DEFAULT_CURRENCY)?
            .set_default("currency_symbol", "$")?
            .set_default("currency_decimals", 2_i64)?
            .set_default("log_level", "info")?
            .set_default("country", DEFAULT_COUNTRY)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> CliResult<Self> {
        let config: CliConfig = builder.build()?.try_deserialize()?;
        config.normalized()
    }

    /// Upper-cases codes and rejects values the commands cannot use.
    fn normalized(mut self) -> CliResult<Self> {
        self.currency_code = validate_currency_code(&self.currency_code)?;

        let country = self.country.trim();
        if country.len() != 2 || !country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::InvalidFormat {
                field: "country".to_string(),
                reason: "must be a two-letter country code".to_string(),
            }
            .into());
        }
        self.country = country.to_ascii_uppercase();

        self.city = self
            .city
            .take()
            .map(|city| city.trim().to_string())
            .filter(|city| !city.is_empty());

        Ok(self)
    }

    /// Display settings for money amounts.
    pub fn currency_format(&self) -> CurrencyFormat {
        CurrencyFormat::new(self.currency_symbol.clone(), self.currency_decimals)
    }
}

//! Configuration loading from TOML.
//!
//! Reads `config.toml` into strongly-typed structs. Every section is
//! optional; a missing file falls back to the built-in defaults. The
//! configuration only affects how totals are presented, never how they are
//! computed.

use anyhow::{Context, Result};
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::types::{Price, PriceList, TillError, Total};

/// Largest scale a `Decimal` can carry.
const MAX_SCALE: u32 = 28;

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub currency: CurrencyConfig,
    #[serde(default)]
    pub basket: BasketConfig,
}

/// How totals are rounded and labelled for display.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct CurrencyConfig {
    /// ISO 4217 code, e.g. "USD".
    pub code: String,
    /// Fractional digits shown (minor units).
    pub scale: u32,
    pub rounding: Rounding,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            scale: 2,
            rounding: Rounding::HalfEven,
        }
    }
}

/// Rounding mode applied when a total is shown at the currency scale.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Banker's rounding: ties go to the even digit.
    #[default]
    HalfEven,
    HalfAwayFromZero,
    Truncate,
}

impl From<Rounding> for RoundingStrategy {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::HalfEven => RoundingStrategy::MidpointNearestEven,
            Rounding::HalfAwayFromZero => RoundingStrategy::MidpointAwayFromZero,
            Rounding::Truncate => RoundingStrategy::ToZero,
        }
    }
}

/// The price list the binary totals. Prices are written as strings
/// (`"10.48"`) so they never pass through a TOML float.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BasketConfig {
    pub prices: PriceList,
}

impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            prices: PriceList::from(vec![
                Price::new(dec!(5.50)),
                Price::new(dec!(10.48)),
                Price::new(dec!(12.69)),
            ]),
        }
    }
}

impl CurrencyConfig {
    /// Render a total at the currency scale, e.g. `USD 28.67`.
    pub fn format(&self, total: Total) -> String {
        let rounded = total
            .amount()
            .round_dp_with_strategy(self.scale, self.rounding.into());
        format!("{} {:.*}", self.code, self.scale as usize, rounded)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {path}"))?;
        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to load config file: {path}"))
    }

    /// Load configuration, or the defaults if the file does not exist.
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!(path, "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig =
            toml::from_str(contents).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TillError> {
        if self.currency.code.trim().is_empty() {
            return Err(TillError::Config("currency.code must not be empty".into()));
        }
        if self.currency.scale > MAX_SCALE {
            return Err(TillError::Config(format!(
                "currency.scale {} exceeds the maximum of {MAX_SCALE}",
                self.currency.scale
            )));
        }
        Ok(())
    }
}

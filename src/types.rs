//! Shared types for TILL.
//!
//! Monetary amounts are `rust_decimal::Decimal` values wrapped in small
//! newtypes, so that a price can never be mixed up with an arbitrary number
//! and never passes through binary floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::accumulator;

// ---------------------------------------------------------------------------
// Price
// ---------------------------------------------------------------------------

/// A single monetary amount. Any sign is allowed (refunds, discounts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a decimal literal such as `"10.48"` or `"-3"`.
///
/// Parsing is exact: a literal carrying more digits than a `Decimal` can hold
/// is rejected instead of being rounded.
impl FromStr for Price {
    type Err = TillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str_exact(trimmed)
            .map(Price)
            .map_err(|e| TillError::InvalidPrice(format!("{trimmed:?}: {e}")))
    }
}

/// Prices deserialize from strings only, through the same exact parse as
/// `FromStr`. Bare floats are rejected.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// PriceList
// ---------------------------------------------------------------------------

/// An ordered sequence of prices, read front to back when totalled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList(Vec<Price>);

impl PriceList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, price: Price) {
        self.0.push(price);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Price> {
        self.0.iter()
    }

    /// Exact sum of every price in the list.
    pub fn total(&self) -> Result<Total, TillError> {
        accumulator::sum_prices(self)
    }
}

impl From<Vec<Price>> for PriceList {
    fn from(prices: Vec<Price>) -> Self {
        Self(prices)
    }
}

impl FromIterator<Price> for PriceList {
    fn from_iter<I: IntoIterator<Item = Price>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PriceList {
    type Item = &'a Price;
    type IntoIter = std::slice::Iter<'a, Price>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ---------------------------------------------------------------------------
// Total
// ---------------------------------------------------------------------------

/// The exact sum of a sequence of prices.
///
/// The scale of the underlying decimal is whatever the addition produced; no
/// rounding is applied until the total is formatted for a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Total(Decimal);

impl Total {
    pub const ZERO: Total = Total(Decimal::ZERO);

    pub(crate) fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl Default for Total {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for TILL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TillError {
    /// `index` is the 0-based position of the price that could not be added.
    #[error("Price total overflow at item {index}: {running} + {price} exceeds the decimal range")]
    Overflow {
        index: usize,
        running: Decimal,
        price: Decimal,
    },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

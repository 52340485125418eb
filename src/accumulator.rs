//! Accumulator: exact running totals of prices.
//!
//! A single left-to-right fold with checked decimal addition. The sum is
//! never rounded; the only failure is leaving the range of `Decimal`.

use tracing::{debug, warn};

use crate::types::{Price, TillError, Total};
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Running total over a sequence of prices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    total: Decimal,
    count: usize,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one price to the running total.
    ///
    /// On overflow the accumulator is left untouched and the error carries
    /// the position the price would have taken.
    pub fn add(&mut self, price: Price) -> Result<(), TillError> {
        let running = self.total;
        match running.checked_add(price.amount()) {
            Some(total) => {
                self.total = total;
                self.count += 1;
                Ok(())
            }
            None => {
                warn!(
                    index = self.count,
                    running = %running,
                    price = %price,
                    "Price total overflowed"
                );
                Err(TillError::Overflow {
                    index: self.count,
                    running,
                    price: price.amount(),
                })
            }
        }
    }

    /// Add prices in order, stopping at the first overflow.
    pub fn extend<I>(&mut self, prices: I) -> Result<(), TillError>
    where
        I: IntoIterator<Item = Price>,
    {
        for price in prices {
            self.add(price)?;
        }
        Ok(())
    }

    /// Number of prices added so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn total(&self) -> Total {
        Total::new(self.total)
    }

    pub fn finish(self) -> Total {
        self.total()
    }
}

// ---------------------------------------------------------------------------
// Fold
// ---------------------------------------------------------------------------

/// Sum a sequence of prices exactly. An empty sequence sums to zero.
pub fn sum_prices<'a, I>(prices: I) -> Result<Total, TillError>
where
    I: IntoIterator<Item = &'a Price>,
{
    let mut accumulator = Accumulator::new();
    accumulator.extend(prices.into_iter().copied())?;

    let count = accumulator.count();
    let total = accumulator.finish();
    debug!(count, total = %total, "Prices summed");

    Ok(total)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

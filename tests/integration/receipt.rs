//! Totalling receipts built from text and from running accumulators.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use till::accumulator::{sum_prices, Accumulator};
use till::types::{Price, PriceList, TillError};

fn receipt(lines: &[&str]) -> PriceList {
    lines
        .iter()
        .map(|line| line.parse::<Price>())
        .collect::<Result<PriceList, TillError>>()
        .unwrap()
}

#[test]
fn test_receipt_with_refund_line() {
    let prices = receipt(&["5.50", "10.48", "12.69", "-10.48"]);
    assert_eq!(prices.total().unwrap().amount(), dec!(18.19));
}

#[test]
fn test_receipt_rejects_bad_line() {
    let parsed: Result<PriceList, TillError> =
        ["5.50", "ten", "12.69"].iter().map(|line| line.parse()).collect();
    assert!(matches!(parsed, Err(TillError::InvalidPrice(_))));
}

#[test]
fn test_list_total_matches_running_total() {
    let prices = receipt(&["1.99", "0.01", "249.00", "-12.50", "0.333"]);

    let mut accumulator = Accumulator::new();
    for price in &prices {
        accumulator.add(*price).unwrap();
    }

    assert_eq!(accumulator.count(), prices.len());
    assert_eq!(accumulator.finish(), prices.total().unwrap());
    assert_eq!(sum_prices(&prices).unwrap().amount(), dec!(238.833));
}

#[test]
fn test_overflow_yields_no_partial_total() {
    let mut prices = PriceList::new();
    prices.push(Price::new(Decimal::MAX));
    prices.push(Price::new(dec!(-1)));
    prices.push(Price::new(Decimal::MAX));

    match prices.total() {
        Err(TillError::Overflow { index, price, .. }) => {
            assert_eq!(index, 2);
            assert_eq!(price, Decimal::MAX);
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[test]
fn test_many_cents_sum_exactly() {
    let prices: PriceList = std::iter::repeat(Price::new(dec!(0.01))).take(10_000).collect();
    assert_eq!(prices.total().unwrap().amount(), dec!(100));
}

//! The price basket end to end: config file in, formatted total out.

use rust_decimal_macros::dec;

use till::config::{AppConfig, Rounding};

fn temp_path() -> String {
    let mut p = std::env::temp_dir();
    p.push(format!("till_it_config_{}.toml", uuid::Uuid::new_v4()));
    p.to_string_lossy().to_string()
}

#[test]
fn test_default_basket_totals_to_28_67() {
    let cfg = AppConfig::default();
    let total = cfg.basket.prices.total().unwrap();

    assert_eq!(total.amount(), dec!(28.67));
    assert_eq!(cfg.currency.format(total), "USD 28.67");
}

#[test]
fn test_basket_from_config_file() {
    let path = temp_path();
    std::fs::write(
        &path,
        r#"
        [currency]
        code = "EUR"
        rounding = "truncate"

        [basket]
        prices = ["0.10", "0.20", "0.005"]
        "#,
    )
    .unwrap();

    let cfg = AppConfig::load_or_default(&path).unwrap();
    assert_eq!(cfg.currency.rounding, Rounding::Truncate);

    let total = cfg.basket.prices.total().unwrap();
    assert_eq!(total.amount(), dec!(0.305));
    assert_eq!(cfg.currency.format(total), "EUR 0.30");

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_bad_config_file_is_reported() {
    let path = temp_path();
    std::fs::write(&path, "[basket]\nprices = [\"not a price\"]\n").unwrap();

    let err = AppConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains(&path));

    std::fs::remove_file(&path).unwrap();
}

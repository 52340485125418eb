//! TILL: exact decimal price totals.
//!
//! Entry point. Loads `.env` and configuration, initialises structured
//! logging, and prints the total of the configured basket.

use anyhow::Result;
use tracing::info;

use till::config::AppConfig;

/// Config file read when `TILL_CONFIG` is unset.
const DEFAULT_CONFIG_FILE: &str = "config.toml";

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    init_logging();

    let path = std::env::var("TILL_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let cfg = AppConfig::load_or_default(&path)?;

    let prices = &cfg.basket.prices;
    info!(
        count = prices.len(),
        currency = %cfg.currency.code,
        scale = cfg.currency.scale,
        "Totalling basket"
    );

    let total = prices.total()?;
    info!(total = %total, "Basket totalled");

    println!("{}", cfg.currency.format(total));
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("till=info"));

    let json_logging = std::env::var("TILL_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

//! JSON configuration example
//!
//! Loads logger settings from JSON and uses a private registry.
//!
//! Run with: cargo run --example json_config

use logger_config::prelude::*;

const CONFIG: &str = r#"{
    "name": "json_demo",
    "level": "info",
    "formatter": "%(asctime)s [%(levelname)-5s] %(name)s: %(message)s",
    "timestamp_format": "Iso8601"
}"#;

fn main() -> Result<()> {
    println!("=== Logger Config - JSON Configuration Example ===\n");

    let registry = LoggerRegistry::new();
    let logger = LoggerConfig::from_json_str(CONFIG)?.get_logger_in(&registry)?;

    logger.debug("Hidden: below the configured level");
    logger.info("Loaded from JSON");
    logger.log_with_fields(LogLevel::Warn, "Slow request", [("elapsed_ms", 1250)]);

    println!("\nRegistered loggers: {:?}", registry.names());
    println!("Records emitted: {}", logger.metrics().emitted());

    Ok(())
}

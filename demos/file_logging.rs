//! File logging example
//!
//! Demonstrates logging to the console and a file, in append and overwrite mode.
//!
//! Run with: cargo run --example file_logging

use logger_config::prelude::*;
use logger_config::{info, warn};

fn main() -> Result<()> {
    println!("=== Logger Config - File Logging Example ===\n");

    let template = FormatSpec::new()
        .asctime(true)
        .levelname(true)
        .message(true)
        .field("filename", true)
        .field("lineno", true)
        .build();

    let logger = LoggerConfig::new("file_demo", LogLevel::Debug)
        .log_path("logs")
        .log_file("application.log")
        .create_dirs(true)
        .formatter(template)
        .mode(FileMode::Append)
        .get_logger()?;

    println!("1. Logging to both console and file:");
    logger.info("Application started");
    logger.debug("Loading configuration...");
    warn!(logger, "Using default settings for {} options", 2);

    for i in 1..=3 {
        info!(logger, "Processing item {}/3", i);
    }

    println!("\n2. Starting a fresh file in overwrite mode:");
    let fresh = LoggerConfig::new("file_demo.fresh", LogLevel::Info)
        .console(false)
        .log_path("logs")
        .log_file("latest-run.log")
        .mode_str("w")?
        .get_logger()?;
    fresh.info("Only this run is kept in latest-run.log");

    logger.flush()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'logs/application.log' and 'logs/latest-run.log'");

    Ok(())
}

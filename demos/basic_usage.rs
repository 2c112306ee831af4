//! Basic usage example
//!
//! Builds a template from flags and logs to the console at different levels.
//!
//! Run with: cargo run --example basic_usage

use logger_config::prelude::*;

fn main() -> Result<()> {
    println!("=== Logger Config - Basic Usage Example ===\n");

    let template = LoggerConfig::format(true, true, true, true, &[]);
    println!("Template: {}\n", template);

    let logger = LoggerConfig::new("basic", LogLevel::Trace)
        .formatter(template)
        .get_logger()?;

    println!("1. Logging at different levels:");
    logger.trace("This is a trace message");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");
    logger.fatal("This is a fatal message");

    println!("\n2. Raising the threshold to WARN:");
    logger.set_level(LogLevel::Warn);
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");

    println!("\n3. Configuring the same name again duplicates output:");
    let again = LoggerConfig::new("basic", LogLevel::Info).get_logger()?;
    again.info("This line appears twice");

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

//! Basic logger usage example
//!
//! Demonstrates leveled logging to the console, threshold changes, the
//! warn-once deduplication mode, and the call-site macros.
//!
//! Run with: cargo run --example basic_usage

use kazlog::prelude::*;
use kazlog::{info, warn_once};
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== kazlog - Basic Usage Example ===\n");

    // Create a logger with a console handler
    let logger = Logger::builder("demo")
        .level(LogLevel::Debug)
        .handler(ConsoleHandler::new())
        .build();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message (routed to stderr)");

    println!("\n2. Raising the threshold to WARN hides debug and info:");
    logger.set_level(LogLevel::Warn);
    logger.debug("Debug message (hidden)");
    logger.info("Info message (hidden)");
    logger.warn("Warning message (visible)");
    logger.set_level(LogLevel::Debug);

    println!("\n3. Warn-once fires a single time per call site:");
    for attempt in 0..5 {
        logger.warn_once_at(
            format!("retrying connection, attempt {}", attempt),
            file!(),
            line!() as i32,
        );
    }

    println!("\n4. Macros log through the default logger with the call site:");
    kazlog::add_handler(Arc::new(ConsoleHandler::new()));
    info!("server listening on port {}", 8080);
    for _ in 0..3 {
        warn_once!("deprecated flag --legacy used");
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}

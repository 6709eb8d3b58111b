//! File logging example
//!
//! Demonstrates the file handler, handler fan-out, the registry, and the
//! positional formatter.
//!
//! Run with: cargo run --example file_logging

use kazlog::core::format_positional;
use kazlog::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== kazlog - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("kazlog_demo.log");

    // One logger, two sinks: everything goes to the console and the file.
    let file_handler = Arc::new(FileHandler::new(&log_path)?);
    let logger = Logger::builder("files")
        .handler(ConsoleHandler::with_colors(false))
        .handler_arc(file_handler.clone())
        .build();

    println!("1. Logging to {} and the console:", log_path.display());
    logger.info("application started");
    logger.warn_at("cache directory missing, recreating", "cache.rs", 120);
    logger.error("upstream returned 503");
    logger.flush()?;

    println!("\n2. Registry loggers share the file handler:");
    let net = get_logger("net");
    net.add_handler(file_handler.clone());
    net.info("connection pool warmed up");
    net.flush()?;

    println!("\n3. Positional formatting before logging:");
    let line = format_positional("{0} failed after {1} retries", &["fsync", "3"])?;
    logger.error(line);
    logger.flush()?;

    let content = std::fs::read_to_string(&log_path)?;
    println!("\n4. File now contains {} lines:", content.lines().count());
    for line in content.lines() {
        println!("   | {}", line);
    }

    std::fs::remove_file(&log_path).ok();
    println!("\n=== Example completed successfully! ===");

    Ok(())
}

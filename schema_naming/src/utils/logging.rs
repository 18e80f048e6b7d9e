//! Logging utilities for schema_naming
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Parse a configured level name, falling back to INFO
pub fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Pick the log destination: the configured file, stdout, or nothing
fn make_writer(config: &LoggingConfig) -> Result<Option<BoxMakeWriter>> {
    if let Some(file_path) = &config.file {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = File::create(file_path)?;
        return Ok(Some(BoxMakeWriter::new(file)));
    }

    if config.stdout {
        return Ok(Some(BoxMakeWriter::new(std::io::stdout)));
    }

    Ok(None)
}

/// Initialize logging based on configuration
pub fn init_logging(config: &Option<LoggingConfig>) -> Result<()> {
    let config = match config {
        Some(cfg) => cfg,
        None => return Ok(()),
    };

    let writer = match make_writer(config)? {
        Some(writer) => writer,
        None => return Ok(()),
    };

    let directive = format!("schema_naming={}", parse_level(&config.level))
        .parse()
        .map_err(|e| Error::LoggingError(format!("Invalid log directive: {}", e)))?;
    let env_filter = EnvFilter::from_default_env().add_directive(directive);

    let layer: Box<dyn Layer<Registry> + Send + Sync> = if config.format.eq_ignore_ascii_case("json") {
        fmt::layer().json().with_writer(writer).boxed()
    } else {
        fmt::layer().with_writer(writer).boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| Error::LoggingError(e.to_string()))
}

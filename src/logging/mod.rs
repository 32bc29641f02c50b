//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - Console output
//! - Local JSON file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use cloak::logging::init_logging;
//! use cloak::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a redaction run
#[macro_export]
macro_rules! log_redaction_start {
    ($source:expr) => {
        tracing::info!(
            source = %$source,
            "Starting redaction"
        );
    };
}

/// Log the completion of a redaction run
#[macro_export]
macro_rules! log_redaction_complete {
    ($matches:expr, $duration:expr) => {
        tracing::info!(
            matches = $matches,
            duration_ms = $duration.as_millis() as u64,
            "Redaction completed"
        );
    };
}

//! Redaction module for Cloak
//!
//! This module provides PII detection and redaction for plain text. Given a
//! string and a set of enabled PII types, it produces a redacted copy of the
//! text plus the list of detections that survived conflict resolution.
//!
//! # Architecture
//!
//! The pipeline consists of:
//! - **Detection**: independent per-type pattern detectors
//! - **Resolution**: first-fit selection of a non-overlapping match subset
//! - **Rewriting**: mask or label substitution with offset tracking
//! - **Reporting**: detection-only scan reports
//!
//! # Usage
//!
//! ```
//! use cloak::redaction::{RedactionEngine, RedactionOptions};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(RedactionOptions::default())?;
//! let result = engine.redact("Call 555-123-4567")?;
//! # Ok(())
//! # }
//! ```

pub mod detector;
pub mod engine;
pub mod models;
pub mod report;
pub mod resolver;
pub mod rewriter;

// Re-export main types
pub use detector::phone::PhoneRegion;
pub use engine::RedactionEngine;
pub use models::{PiiMatch, PiiType, RedactionOptions, RedactionResult, RedactionStyle};
pub use report::ScanReport;

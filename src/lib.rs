// Cloak - PII Detection and Redaction Tool
// Copyright (c) 2025 Cloak Contributors
// Licensed under the MIT License

//! # Cloak - PII Detection and Redaction
//!
//! Cloak detects personally identifiable information (emails, phone numbers,
//! names, postal addresses) in plain text and produces a redacted copy of
//! the text, annotated with the detections made.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII with independent per-type pattern detectors
//! - **Resolving** overlapping detections with first-fit interval scheduling
//! - **Rewriting** text with mask or label redaction tokens
//! - **Extracting** plain text from TXT, JSON, CSV, and RTF files
//!
//! ## Architecture
//!
//! Cloak follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`redaction`] - Detection, resolution, rewriting, and reporting
//! - [`extract`] - Text extraction from supported file formats
//! - [`domain`] - Error types and the crate-wide Result alias
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust
//! use cloak::redaction::{RedactionEngine, RedactionOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = RedactionEngine::new(RedactionOptions::default())?;
//!
//!     let result = engine.redact("Email: a@b.com Phone: 555-123-4567")?;
//!
//!     println!("{}", result.redacted_text);
//!     println!("Redacted {} matches", result.total_matches());
//!     Ok(())
//! }
//! ```
//!
//! ## Redaction Styles
//!
//! Two token styles are supported:
//!
//! - **Label**: typed, sequentially numbered placeholders (`[EMAIL1]`,
//!   `[PHONE1]`). Token lengths differ from the matched spans, so the
//!   rewriter tracks a running offset.
//! - **Mask**: a fixed-width filler, one character per matched character,
//!   which preserves the character length of the text.
//!
//! ```rust
//! use cloak::redaction::{PiiType, RedactionEngine, RedactionOptions, RedactionStyle};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = RedactionOptions {
//!     enabled_types: vec![PiiType::Phone],
//!     style: RedactionStyle::Mask,
//!     ..Default::default()
//! };
//! let engine = RedactionEngine::new(options)?;
//! let result = engine.redact("Call 555-1234")?;
//! assert_eq!(result.redacted_text.chars().count(), "Call 555-1234".chars().count());
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Cloak uses the [`domain::CloakError`] type for all errors:
//!
//! ```rust,no_run
//! use cloak::domain::CloakError;
//!
//! fn example() -> Result<(), CloakError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = cloak::config::load_config("cloak.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Cloak uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting redaction");
//! warn!(input = "letter.txt", "No matches found");
//! error!(error = "oops", "Redaction failed");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod extract;
pub mod logging;
pub mod redaction;

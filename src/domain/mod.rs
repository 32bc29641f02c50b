//! Domain types for Cloak.
//!
//! This module contains the error hierarchy and the crate-wide [`Result`]
//! alias. The PII data model (types, matches, options, results) lives in
//! [`crate::redaction::models`] next to the engine that produces it.
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, CloakError>`]:
//!
//! ```rust
//! use cloak::domain::{CloakError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = cloak::config::load_config("cloak.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{CloakError, ExtractionError};
pub use result::Result;

//! PII data models

pub mod pii;

pub use pii::{PiiMatch, PiiType, RedactionOptions, RedactionResult, RedactionStyle};

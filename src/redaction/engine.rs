//! Main redaction engine
//!
//! This module provides the core [`RedactionEngine`] that orchestrates PII
//! detection, conflict resolution, and rewriting over a single in-memory
//! string.
//!
//! # Architecture
//!
//! The engine coordinates three components:
//! - **Detectors**: independent pattern scanners, one per enabled PII type
//! - **Resolver**: first-fit selection of a non-overlapping match subset
//! - **Rewriter**: offset-tracked substitution of redaction tokens
//!
//! # Examples
//!
//! ```
//! use cloak::redaction::{RedactionEngine, RedactionOptions};
//!
//! # fn example() -> anyhow::Result<()> {
//! let engine = RedactionEngine::new(RedactionOptions::default())?;
//! let result = engine.redact("Email: a@b.com")?;
//! println!("Found {} matches", result.total_matches());
//! # Ok(())
//! # }
//! ```

use crate::domain::{CloakError, Result};
use crate::redaction::{
    detector::{
        address::AddressDetector,
        email::EmailDetector,
        name::NameDetector,
        phone::{PhoneDetector, PhoneRegion},
        PiiDetector,
    },
    models::{PiiMatch, PiiType, RedactionOptions, RedactionResult},
    resolver, rewriter,
};
use std::collections::HashMap;

/// Main redaction engine
///
/// Synchronous and stateless: every call runs detection, resolution, and
/// rewriting from scratch over the given text and retains nothing. Detectors
/// are pure, so the engine can be shared across threads behind an `Arc`.
pub struct RedactionEngine {
    options: RedactionOptions,
    detectors: Vec<Box<dyn PiiDetector>>,
}

impl std::fmt::Debug for RedactionEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedactionEngine")
            .field("options", &self.options)
            .field("detectors", &self.detectors.len())
            .finish()
    }
}

impl RedactionEngine {
    /// Create a new engine for the default phone region
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `options.enabled_types` is empty,
    /// or a detection error when a detector pattern fails to compile.
    pub fn new(options: RedactionOptions) -> Result<Self> {
        Self::with_region(options, PhoneRegion::default())
    }

    /// Create a new engine with an explicit default phone region
    pub fn with_region(options: RedactionOptions, region: PhoneRegion) -> Result<Self> {
        options
            .validate()
            .map_err(CloakError::Configuration)?;

        // Fixed priority order; the resolver's tie-breaking depends on it
        let mut detectors: Vec<Box<dyn PiiDetector>> = Vec::new();
        for pii_type in PiiType::priority_order() {
            if !options.is_enabled(pii_type) {
                continue;
            }
            let detector: Box<dyn PiiDetector> = match pii_type {
                PiiType::Email => Box::new(
                    EmailDetector::new().map_err(|e| CloakError::Detection(e.to_string()))?,
                ),
                PiiType::Phone => Box::new(
                    PhoneDetector::with_region(region)
                        .map_err(|e| CloakError::Detection(e.to_string()))?,
                ),
                PiiType::Name => Box::new(
                    NameDetector::new().map_err(|e| CloakError::Detection(e.to_string()))?,
                ),
                PiiType::Address => Box::new(
                    AddressDetector::new().map_err(|e| CloakError::Detection(e.to_string()))?,
                ),
            };
            detectors.push(detector);
        }

        Ok(Self { options, detectors })
    }

    /// Detect and redact PII in `text`
    ///
    /// # Errors
    ///
    /// Returns a validation error for empty or whitespace-only input. PII
    /// detection itself never fails: malformed candidates are skipped.
    pub fn redact(&self, text: &str) -> Result<RedactionResult> {
        let surviving = self.scan(text)?;

        let redacted_text = rewriter::rewrite(
            text,
            &surviving,
            self.options.style,
            self.options.mask_char,
        );

        let mut summary: HashMap<PiiType, usize> = HashMap::new();
        for m in &surviving {
            *summary.entry(m.pii_type).or_insert(0) += 1;
        }

        tracing::debug!(
            matches = surviving.len(),
            style = %self.options.style,
            "Redaction complete"
        );

        Ok(RedactionResult {
            original_text: text.to_string(),
            redacted_text,
            matches: surviving,
            summary,
        })
    }

    /// Detect PII in `text` without rewriting
    ///
    /// Runs every enabled detector and conflict resolution, returning the
    /// surviving matches in ascending start order.
    pub fn scan(&self, text: &str) -> Result<Vec<PiiMatch>> {
        if text.trim().is_empty() {
            return Err(CloakError::Validation(
                "Input text is empty or whitespace-only".to_string(),
            ));
        }

        let mut collected = Vec::new();
        for detector in &self.detectors {
            let matches = detector.detect(text);
            tracing::trace!(
                pii_type = %detector.pii_type(),
                count = matches.len(),
                "Detector pass complete"
            );
            collected.extend(matches);
        }

        debug_assert!(
            collected
                .iter()
                .all(|m| m.start < m.end && m.end <= text.len()),
            "detector emitted a match with invalid offsets"
        );

        let surviving = resolver::resolve(collected);

        debug_assert!(
            surviving.windows(2).all(|w| w[0].end <= w[1].start),
            "resolved match set is not non-overlapping and ascending"
        );

        Ok(surviving)
    }

    /// Redact a batch of pre-extracted documents
    ///
    /// Fail-safe: a document that fails (e.g. empty after extraction) is
    /// logged and skipped, and never aborts the rest of the batch.
    pub fn redact_batch(&self, documents: &[String]) -> Vec<RedactionResult> {
        let mut results = Vec::with_capacity(documents.len());

        for document in documents {
            match self.redact(document) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to redact document");
                    continue;
                }
            }
        }

        results
    }

    /// The options this engine was built with
    pub fn options(&self) -> &RedactionOptions {
        &self.options
    }
}

//! Postal address detector

use super::PiiDetector;
use crate::redaction::models::{PiiMatch, PiiType};
use anyhow::Result;
use regex::Regex;

/// Fixed confidence for address matches
const ADDRESS_CONFIDENCE: f32 = 0.85;

/// Address-indicating vocabulary: street suffixes, administrative terms,
/// unit terms. Matched by substring containment on the lowercased candidate.
const ADDRESS_KEYWORDS: &[&str] = &[
    "street",
    "st",
    "road",
    "rd",
    "avenue",
    "ave",
    "lane",
    "ln",
    "boulevard",
    "blvd",
    "sector",
    "plot",
    "block",
    "village",
    "colony",
    "city",
    "state",
    "zip",
    "postal",
    "district",
    "taluk",
    "pincode",
    "county",
    "apartment",
    "apt",
    "flat",
    "near",
];

/// Postal address detector
///
/// Matches a house-number token followed by word-like content, then accepts
/// the candidate only when it contains at least one address keyword.
pub struct AddressDetector {
    pattern: Regex,
}

impl AddressDetector {
    /// Create a new address detector
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b\d{1,5}\s+[A-Za-z0-9.,\s-]{5,60}\b")?;
        Ok(Self { pattern })
    }
}

impl PiiDetector for AddressDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Address
    }

    fn detect(&self, text: &str) -> Vec<PiiMatch> {
        let mut matches = Vec::new();

        for m in self.pattern.find_iter(text) {
            let candidate = m.as_str();
            let lowered = candidate.to_lowercase();

            if !ADDRESS_KEYWORDS.iter().any(|k| lowered.contains(k)) {
                continue;
            }

            matches.push(PiiMatch::new(
                PiiType::Address,
                candidate,
                m.start(),
                m.end(),
                ADDRESS_CONFIDENCE,
            ));
        }

        matches
    }
}

//! Person name detector
//!
//! Capitalization is a weak signal, so this is the lowest-confidence
//! detector. It runs after the higher-precision detectors and loses
//! conflicts to them in resolution.

use super::PiiDetector;
use crate::redaction::models::{PiiMatch, PiiType};
use anyhow::Result;
use regex::Regex;

/// Fixed confidence for name matches
const NAME_CONFIDENCE: f32 = 0.70;

/// Structural and document words that start phrases which are not names
const STOPWORDS: &[&str] = &[
    "Street",
    "St",
    "Road",
    "Avenue",
    "Email",
    "Phone",
    "Document",
    "Record",
    "Location",
    "Return",
    "Date",
    "Publisher",
    "Department",
    "Employee",
    "Manager",
    "Notes",
    "Branch",
];

/// Person name detector
///
/// Matches sequences of 1-4 capitalized words, filtered through a stopword
/// set of structural document terms.
pub struct NameDetector {
    pattern: Regex,
}

impl NameDetector {
    /// Create a new name detector
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+){0,3}\b")?;
        Ok(Self { pattern })
    }
}

impl PiiDetector for NameDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Name
    }

    fn detect(&self, text: &str) -> Vec<PiiMatch> {
        let mut matches = Vec::new();

        for m in self.pattern.find_iter(text) {
            let phrase = m.as_str();

            let Some(first_word) = phrase.split_whitespace().next() else {
                continue;
            };
            if STOPWORDS.contains(&first_word) {
                continue;
            }
            if phrase.len() < 3 {
                continue;
            }

            matches.push(PiiMatch::new(
                PiiType::Name,
                phrase,
                m.start(),
                m.end(),
                NAME_CONFIDENCE,
            ));
        }

        matches
    }
}

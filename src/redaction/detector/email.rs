//! Email address detector

use super::PiiDetector;
use crate::redaction::models::{PiiMatch, PiiType};
use anyhow::Result;
use regex::Regex;

/// Fixed confidence for email matches. Below a strict-pattern detector's
/// score because the OCR tolerance admits some junk.
const EMAIL_CONFIDENCE: f32 = 0.95;

/// Email address detector
///
/// Tolerant of common OCR artifacts: whitespace around the `@` and the `@`
/// rendered as `(@)`. The emitted `value` is the cleaned form; the span is
/// the raw match.
pub struct EmailDetector {
    pattern: Regex,
}

impl EmailDetector {
    /// Create a new email detector
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(r"[A-Za-z0-9._%+-]+\s*(?:@|\s*\(?@\)?\s*)\s*[A-Za-z0-9.-]+\.[A-Za-z]{2,}")?;
        Ok(Self { pattern })
    }

    /// Strip internal whitespace and collapse the parenthesized-at form
    fn clean(raw: &str) -> String {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
        compact.replacen("(@)", "@", 1)
    }
}

impl PiiDetector for EmailDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Email
    }

    fn detect(&self, text: &str) -> Vec<PiiMatch> {
        self.pattern
            .find_iter(text)
            .map(|m| {
                PiiMatch::new(
                    PiiType::Email,
                    Self::clean(m.as_str()),
                    m.start(),
                    m.end(),
                    EMAIL_CONFIDENCE,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_plain_email() {
        let detector = EmailDetector::new().unwrap();
        let matches = detector.detect("Contact: john.doe@example.com today");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "john.doe@example.com");
        assert_eq!(matches[0].start, 9);
        assert_eq!(matches[0].end, 29);
        assert_eq!(matches[0].confidence, 0.95);
    }

    #[test]
    fn test_detect_ocr_spaced_at() {
        let detector = EmailDetector::new().unwrap();
        let matches = detector.detect("reach me at jane @ example.org please");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "jane@example.org");
        // Span covers the raw text including the OCR whitespace
        assert_eq!(&"reach me at jane @ example.org please"[matches[0].start..matches[0].end], "jane @ example.org");
    }

    #[test]
    fn test_detect_parenthesized_at() {
        let detector = EmailDetector::new().unwrap();
        let matches = detector.detect("bob(@)corp.io");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "bob@corp.io");
    }

    #[test]
    fn test_no_match_on_plain_text() {
        let detector = EmailDetector::new().unwrap();
        assert!(detector.detect("nothing to see here").is_empty());
        assert!(detector.detect("not-an-email@nodot").is_empty());
    }

    #[test]
    fn test_multiple_emails() {
        let detector = EmailDetector::new().unwrap();
        let matches = detector.detect("a@b.com and c@d.org");

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].value, "a@b.com");
        assert_eq!(matches[1].value, "c@d.org");
        assert!(matches[0].start < matches[1].start);
    }
}

//! Phone number detector
//!
//! Two-stage detection: a permissive candidate pattern finds numeric runs,
//! then a region-aware grammar accepts or rejects each candidate. This is
//! the only detector with a genuine accept/reject decision beyond pattern
//! matching; rejected candidates are discarded silently.

use super::PiiDetector;
use crate::redaction::models::{PiiMatch, PiiType};
use anyhow::Result;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Base confidence for a validated phone number
const PHONE_BASE_CONFIDENCE: f32 = 0.90;

/// Country calling codes the validator resolves, with the allowed national
/// number length window for each. Longest prefix wins.
const COUNTRY_CODES: &[(&str, usize, usize)] = &[
    ("1", 10, 10),   // NANP (US, CA, ...)
    ("7", 10, 10),   // RU, KZ
    ("20", 8, 10),   // EG
    ("27", 9, 9),    // ZA
    ("30", 10, 10),  // GR
    ("31", 9, 9),    // NL
    ("32", 8, 9),    // BE
    ("33", 9, 9),    // FR
    ("34", 9, 9),    // ES
    ("39", 6, 11),   // IT
    ("40", 9, 9),    // RO
    ("41", 9, 9),    // CH
    ("43", 7, 11),   // AT
    ("44", 9, 10),   // GB
    ("45", 8, 8),    // DK
    ("46", 7, 10),   // SE
    ("47", 8, 8),    // NO
    ("48", 9, 9),    // PL
    ("49", 6, 11),   // DE
    ("52", 10, 10),  // MX
    ("55", 10, 11),  // BR
    ("61", 9, 9),    // AU
    ("62", 8, 11),   // ID
    ("63", 8, 10),   // PH
    ("64", 8, 10),   // NZ
    ("65", 8, 8),    // SG
    ("66", 8, 9),    // TH
    ("81", 9, 10),   // JP
    ("82", 8, 10),   // KR
    ("84", 9, 10),   // VN
    ("86", 10, 11),  // CN
    ("90", 10, 10),  // TR
    ("91", 10, 10),  // IN
    ("92", 9, 10),   // PK
    ("234", 8, 10),  // NG
    ("353", 7, 9),   // IE
    ("358", 6, 10),  // FI
    ("420", 9, 9),   // CZ
    ("852", 8, 8),   // HK
    ("886", 8, 9),   // TW
    ("971", 8, 9),   // AE
    ("972", 8, 9),   // IL
];

/// Default region assumed for candidates without a country code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhoneRegion {
    /// United States / NANP
    #[default]
    Us,
    /// United Kingdom
    Gb,
    /// Germany
    De,
    /// France
    Fr,
    /// India
    In,
    /// Australia
    Au,
}

impl PhoneRegion {
    /// Check a national-format digit string against this region's grammar
    fn is_valid_national(&self, digits: &str) -> bool {
        let bytes = digits.as_bytes();
        match self {
            // NANP: 7-digit local, 10-digit national, or 11 with trunk 1.
            // Leading digit of the local/area part must not be 0 or 1.
            Self::Us => match bytes.len() {
                7 | 10 => bytes[0] >= b'2',
                11 => bytes[0] == b'1' && bytes[1] >= b'2',
                _ => false,
            },
            // Trunk-0 formats with national length windows
            Self::Gb => bytes[0] == b'0' && (bytes.len() == 10 || bytes.len() == 11),
            Self::De => bytes[0] == b'0' && (7..=12).contains(&bytes.len()),
            Self::Fr => bytes[0] == b'0' && bytes.len() == 10,
            Self::Au => bytes[0] == b'0' && bytes.len() == 10,
            // Mobile numbers start 6-9; trunk-0 form also accepted
            Self::In => match bytes.len() {
                10 => bytes[0] >= b'6',
                11 => bytes[0] == b'0' && bytes[1] >= b'6',
                _ => false,
            },
        }
    }
}

impl FromStr for PhoneRegion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "GB" => Ok(Self::Gb),
            "DE" => Ok(Self::De),
            "FR" => Ok(Self::Fr),
            "IN" => Ok(Self::In),
            "AU" => Ok(Self::Au),
            _ => Err(format!(
                "Unknown phone region: {s}. Must be one of: US, GB, DE, FR, IN, AU"
            )),
        }
    }
}

/// Phone number detector with region-aware validation
pub struct PhoneDetector {
    candidate: Regex,
    region: PhoneRegion,
}

impl PhoneDetector {
    /// Create a new phone detector for the default region
    pub fn new() -> Result<Self> {
        Self::with_region(PhoneRegion::default())
    }

    /// Create a new phone detector with an explicit default region
    pub fn with_region(region: PhoneRegion) -> Result<Self> {
        // Optional leading +, 7-21 inner characters of digits/space/()/./-
        // (unicode dash variants included), ending in a digit.
        let candidate = Regex::new(r"\+?\d[\d\s().\u{2010}-\u{2015}-]{6,20}\d")?;
        Ok(Self { candidate, region })
    }

    /// Normalize unicode dash variants and collapse whitespace
    fn clean(raw: &str) -> String {
        let dashed: String = raw
            .chars()
            .map(|c| if ('\u{2010}'..='\u{2015}').contains(&c) { '-' } else { c })
            .collect();
        dashed.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    /// Validate a cleaned candidate. `None` rejects the candidate; the
    /// inner value is the resolved country code for `+`-prefixed numbers.
    fn validate(&self, cleaned: &str) -> Option<Option<&'static str>> {
        let has_plus = cleaned.starts_with('+');
        let digits: String = cleaned.chars().filter(|c| c.is_ascii_digit()).collect();

        // E.164 bounds; anything outside is noise, not a phone number
        if digits.len() < 7 || digits.len() > 15 {
            return None;
        }

        if has_plus {
            let (code, min_nsn, max_nsn) = resolve_country_code(&digits)?;
            let national = &digits[code.len()..];
            if national.len() < min_nsn || national.len() > max_nsn {
                return None;
            }
            // NANP applies its own shape on top of the length window
            if code == "1" && national.as_bytes()[0] < b'2' {
                return None;
            }
            Some(Some(code))
        } else {
            self.region.is_valid_national(&digits).then_some(None)
        }
    }

    /// Confidence: base 0.90, boosted for signals of deliberate formatting,
    /// capped at 1.0
    fn confidence(cleaned: &str, country_code: Option<&str>) -> f32 {
        let mut confidence = PHONE_BASE_CONFIDENCE;
        if cleaned.contains('+') {
            confidence += 0.05;
        }
        if cleaned.contains('(') {
            confidence += 0.03;
        }
        if country_code.is_some() {
            confidence += 0.02;
        }
        confidence.min(1.0)
    }
}

/// Longest-prefix lookup over the country code table
fn resolve_country_code(digits: &str) -> Option<(&'static str, usize, usize)> {
    for prefix_len in (1..=3).rev() {
        if digits.len() <= prefix_len {
            continue;
        }
        let prefix = &digits[..prefix_len];
        if let Some(entry) = COUNTRY_CODES.iter().find(|(code, _, _)| *code == prefix) {
            return Some(*entry);
        }
    }
    None
}

impl PiiDetector for PhoneDetector {
    fn pii_type(&self) -> PiiType {
        PiiType::Phone
    }

    fn detect(&self, text: &str) -> Vec<PiiMatch> {
        let mut matches = Vec::new();

        for m in self.candidate.find_iter(text) {
            let cleaned = Self::clean(m.as_str());

            let Some(country_code) = self.validate(&cleaned) else {
                continue;
            };

            let confidence = Self::confidence(&cleaned, country_code);
            matches.push(PiiMatch::new(
                PiiType::Phone,
                cleaned,
                m.start(),
                m.end(),
                confidence,
            ));
        }

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_detect_dashed_national() {
        let detector = PhoneDetector::new().unwrap();
        let matches = detector.detect("Phone: 555-123-4567");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "555-123-4567");
        assert_eq!(matches[0].start, 7);
        assert_eq!(matches[0].end, 19);
        assert_eq!(matches[0].confidence, 0.90);
    }

    #[test]
    fn test_detect_seven_digit_local() {
        let detector = PhoneDetector::new().unwrap();
        let matches = detector.detect("Call 555-1234");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "555-1234");
    }

    #[test]
    fn test_candidate_starts_at_first_digit() {
        // The candidate pattern anchors on a digit, so a leading paren is
        // left outside the span
        let detector = PhoneDetector::new().unwrap();
        let matches = detector.detect("Call (555) 123-4567 now");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "555) 123-4567");
        assert_eq!(matches[0].confidence, 0.90);
    }

    #[test]
    fn test_parentheses_boost() {
        let detector = PhoneDetector::new().unwrap();
        let matches = detector.detect("Call +1 (555) 123-4567 now");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "+1 (555) 123-4567");
        // +, parentheses, and resolved country code max out the boost
        assert!((matches[0].confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_international_boost() {
        let detector = PhoneDetector::new().unwrap();
        let matches = detector.detect("office +44 20 7946 0958 ext");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "+44 20 7946 0958");
        // + and resolved country code: 0.90 + 0.05 + 0.02
        assert!((matches[0].confidence - 0.97).abs() < 1e-6);
    }

    #[test]
    fn test_unicode_dash_normalized() {
        let detector = PhoneDetector::new().unwrap();
        let text = "num 555\u{2013}123\u{2013}4567 end";
        let matches = detector.detect(text);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "555-123-4567");
        // Span still points at the raw text with the unicode dashes
        assert_eq!(&text[matches[0].start..matches[0].end], "555\u{2013}123\u{2013}4567");
    }

    #[test]
    fn test_whitespace_collapsed_in_value() {
        let detector = PhoneDetector::new().unwrap();
        let matches = detector.detect("fax 555  123   4567.");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "555 123 4567");
    }

    #[test_case("0123456789" ; "leading zero area code")]
    #[test_case("12345" ; "too short")]
    #[test_case("+999 123 4567" ; "unknown country code")]
    #[test_case("1234567890123456789" ; "longer than e164")]
    fn test_rejected_candidates(text: &str) {
        let detector = PhoneDetector::new().unwrap();
        assert!(detector.detect(text).is_empty());
    }

    #[test]
    fn test_region_grammars() {
        assert!(PhoneRegion::Us.is_valid_national("5551234567"));
        assert!(!PhoneRegion::Us.is_valid_national("0551234567"));
        assert!(PhoneRegion::Us.is_valid_national("15551234567"));
        assert!(PhoneRegion::Gb.is_valid_national("02079460958"));
        assert!(!PhoneRegion::Gb.is_valid_national("2079460958"));
        assert!(PhoneRegion::In.is_valid_national("9876543210"));
        assert!(!PhoneRegion::In.is_valid_national("1234567890"));
    }

    #[test]
    fn test_configured_region() {
        let detector = PhoneDetector::with_region(PhoneRegion::Fr).unwrap();
        let matches = detector.detect("tel 01 42 68 53 00 ok");

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].value, "01 42 68 53 00");
    }

    #[test]
    fn test_region_from_str() {
        assert_eq!("us".parse::<PhoneRegion>().unwrap(), PhoneRegion::Us);
        assert_eq!("GB".parse::<PhoneRegion>().unwrap(), PhoneRegion::Gb);
        assert!("XX".parse::<PhoneRegion>().is_err());
    }
}

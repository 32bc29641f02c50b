//! PII match data models

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// PII type enumeration
///
/// A closed set of detectable categories. Extending it means adding a variant
/// here and a matching detector under [`crate::redaction::detector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PiiType {
    /// Email addresses
    Email,
    /// Telephone numbers
    Phone,
    /// Person names
    Name,
    /// Postal addresses
    Address,
}

impl PiiType {
    /// Human-readable label, used verbatim inside `[LABEL<n>]` tokens
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Name => "NAME",
            Self::Address => "ADDRESS",
        }
    }

    /// All types in detector priority order.
    ///
    /// Higher-precision detectors come first; the conflict resolver relies on
    /// this order to break ties between matches starting at the same offset.
    pub fn priority_order() -> [PiiType; 4] {
        [Self::Email, Self::Phone, Self::Name, Self::Address]
    }
}

impl fmt::Display for PiiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PiiType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            _ => Err(format!(
                "Unknown PII type: {s}. Must be one of: email, phone, name, address"
            )),
        }
    }
}

/// A located, typed, confidence-scored span of the original text
///
/// `start` and `end` are byte offsets into the ORIGINAL text and always
/// describe the raw matched span. `value` is the detector's cleaned form of
/// that span (e.g. an email with OCR whitespace stripped), which may differ
/// in length from the span itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiiMatch {
    /// Category of PII
    pub pii_type: PiiType,
    /// Matched value after detector-internal cleanup
    pub value: String,
    /// Inclusive start offset in the original text
    pub start: usize,
    /// Exclusive end offset in the original text
    pub end: usize,
    /// Confidence score (0.0 - 1.0)
    pub confidence: f32,
}

impl PiiMatch {
    /// Create a new PII match
    pub fn new(
        pii_type: PiiType,
        value: impl Into<String>,
        start: usize,
        end: usize,
        confidence: f32,
    ) -> Self {
        Self {
            pii_type,
            value: value.into(),
            start,
            end,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Byte length of the matched span in the original text
    pub fn span_len(&self) -> usize {
        self.end - self.start
    }
}

/// Redaction style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RedactionStyle {
    /// Length-preserving filler (one mask character per matched character)
    Mask,
    /// Typed, sequentially numbered placeholder (`[EMAIL1]`, `[PHONE2]`, ...)
    #[default]
    Label,
}

impl fmt::Display for RedactionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mask => f.write_str("mask"),
            Self::Label => f.write_str("label"),
        }
    }
}

impl FromStr for RedactionStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mask" => Ok(Self::Mask),
            "label" => Ok(Self::Label),
            _ => Err(format!("Unknown redaction style: {s}. Must be mask or label")),
        }
    }
}

fn default_mask_char() -> char {
    '█'
}

/// Options for a single redaction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionOptions {
    /// PII types to detect (must be non-empty for a meaningful run)
    pub enabled_types: Vec<PiiType>,

    /// Redaction style
    #[serde(default)]
    pub style: RedactionStyle,

    /// Filler character used by the mask style
    #[serde(default = "default_mask_char")]
    pub mask_char: char,
}

impl Default for RedactionOptions {
    fn default() -> Self {
        Self {
            enabled_types: PiiType::priority_order().to_vec(),
            style: RedactionStyle::default(),
            mask_char: default_mask_char(),
        }
    }
}

impl RedactionOptions {
    /// Validate the options
    pub fn validate(&self) -> Result<(), String> {
        if self.enabled_types.is_empty() {
            return Err("At least one PII type must be enabled".to_string());
        }
        Ok(())
    }

    /// Check whether a type is enabled
    pub fn is_enabled(&self, pii_type: PiiType) -> bool {
        self.enabled_types.contains(&pii_type)
    }
}

/// Result of a redaction run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionResult {
    /// The input text, unmodified
    pub original_text: String,
    /// The input text with every surviving match replaced by its token
    pub redacted_text: String,
    /// Surviving matches, ascending by original start offset
    pub matches: Vec<PiiMatch>,
    /// Count of surviving matches per type
    pub summary: HashMap<PiiType, usize>,
}

impl RedactionResult {
    /// Get total number of surviving matches
    pub fn total_matches(&self) -> usize {
        self.matches.len()
    }

    /// Check if any PII was detected
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

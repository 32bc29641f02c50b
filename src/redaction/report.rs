//! Scan reporting
//!
//! This module provides formatted reports for detection-only runs, showing
//! per-type statistics, sample matches, and warnings.

use crate::redaction::models::{PiiMatch, PiiType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scan report with PII detection statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Total documents scanned
    pub total_documents: usize,

    /// Total PII matches found
    pub total_matches: usize,

    /// Matches by PII type
    pub matches_by_type: HashMap<PiiType, usize>,

    /// Sample matches (truncated values)
    pub samples: Vec<ScanSample>,

    /// Warnings (documents that failed to scan)
    pub warnings: Vec<String>,

    /// Processing statistics
    pub stats: ProcessingStats,

    /// Timestamp of the scan
    pub timestamp: DateTime<Utc>,
}

/// Sample match showing what was found and where
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSample {
    /// Matched value (truncated for display)
    pub value: String,

    /// PII type
    pub pii_type: PiiType,

    /// Source document name
    pub document: String,

    /// Start offset in the source document
    pub start: usize,

    /// Confidence score (0.0-1.0)
    pub confidence: f64,
}

/// Processing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingStats {
    /// Average processing time per document (ms)
    pub avg_processing_time_ms: u64,

    /// Total processing time (ms)
    pub total_processing_time_ms: u64,

    /// Documents with PII detected
    pub documents_with_pii: usize,

    /// Documents without PII
    pub documents_without_pii: usize,
}

impl ScanReport {
    /// Create a new empty scan report
    pub fn new() -> Self {
        Self {
            total_documents: 0,
            total_matches: 0,
            matches_by_type: HashMap::new(),
            samples: Vec::new(),
            warnings: Vec::new(),
            stats: ProcessingStats {
                avg_processing_time_ms: 0,
                total_processing_time_ms: 0,
                documents_with_pii: 0,
                documents_without_pii: 0,
            },
            timestamp: Utc::now(),
        }
    }

    /// Add the matches found in one document
    pub fn add_document(&mut self, name: &str, matches: &[PiiMatch], processing_time_ms: u64) {
        self.total_documents += 1;
        self.stats.total_processing_time_ms += processing_time_ms;

        if matches.is_empty() {
            self.stats.documents_without_pii += 1;
        } else {
            self.stats.documents_with_pii += 1;
            self.total_matches += matches.len();

            for m in matches {
                *self.matches_by_type.entry(m.pii_type).or_insert(0) += 1;
            }

            // Limit to the first 3 samples per document
            for m in matches.iter().take(3) {
                self.add_sample(name, m);
            }
        }

        if self.total_documents > 0 {
            self.stats.avg_processing_time_ms =
                self.stats.total_processing_time_ms / self.total_documents as u64;
        }
    }

    /// Add a sample match
    fn add_sample(&mut self, document: &str, m: &PiiMatch) {
        // Limit total samples to 20
        if self.samples.len() >= 20 {
            return;
        }

        // Truncate the value for display (max 50 chars)
        let value = if m.value.chars().count() > 50 {
            let truncated: String = m.value.chars().take(47).collect();
            format!("{truncated}...")
        } else {
            m.value.clone()
        };

        self.samples.push(ScanSample {
            value,
            pii_type: m.pii_type,
            document: document.to_string(),
            start: m.start,
            confidence: m.confidence as f64,
        });
    }

    /// Add a warning
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                       PII SCAN REPORT                         \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!(
            "  Documents Scanned:     {}\n",
            self.total_documents
        ));
        output.push_str(&format!(
            "  Documents with PII:    {}\n",
            self.stats.documents_with_pii
        ));
        output.push_str(&format!(
            "  Documents without PII: {}\n",
            self.stats.documents_without_pii
        ));
        output.push_str(&format!("  Total Matches:         {}\n", self.total_matches));
        output.push_str(&format!(
            "  Avg Processing Time:   {} ms\n",
            self.stats.avg_processing_time_ms
        ));
        output.push('\n');

        if !self.matches_by_type.is_empty() {
            output.push_str("🔍 MATCHES BY TYPE\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            let mut types: Vec<_> = self.matches_by_type.iter().collect();
            types.sort_by(|a, b| b.1.cmp(a.1)); // Sort by count descending

            for (pii_type, count) in types {
                output.push_str(&format!("  {:12} {:>5}\n", pii_type.label(), count));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE MATCHES\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");

            for (i, sample) in self.samples.iter().take(10).enumerate() {
                output.push_str(&format!("\n  Sample #{}\n", i + 1));
                output.push_str(&format!("    Type:        {}\n", sample.pii_type.label()));
                output.push_str(&format!("    Document:    {}\n", sample.document));
                output.push_str(&format!("    Offset:      {}\n", sample.start));
                output.push_str(&format!(
                    "    Confidence:  {:.2}%\n",
                    sample.confidence * 100.0
                ));
                output.push_str(&format!("    Value:       \"{}\"\n", sample.value));
            }
            output.push('\n');
        }

        if !self.warnings.is_empty() {
            output.push_str("⚠️  WARNINGS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for warning in &self.warnings {
                output.push_str(&format!("  • {warning}\n"));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file
    pub fn write_to_file(&self, path: &std::path::Path) -> std::io::Result<()> {
        let json = self
            .format_json()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        std::fs::write(path, json)
    }
}

impl Default for ScanReport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_report_creation() {
        let report = ScanReport::new();
        assert_eq!(report.total_documents, 0);
        assert_eq!(report.total_matches, 0);
        assert!(report.matches_by_type.is_empty());
        assert!(report.samples.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_add_document_without_pii() {
        let mut report = ScanReport::new();
        report.add_document("clean.txt", &[], 10);

        assert_eq!(report.total_documents, 1);
        assert_eq!(report.total_matches, 0);
        assert_eq!(report.stats.documents_without_pii, 1);
        assert_eq!(report.stats.documents_with_pii, 0);
        assert_eq!(report.stats.avg_processing_time_ms, 10);
    }

    #[test]
    fn test_add_document_with_pii() {
        let mut report = ScanReport::new();
        let matches = vec![PiiMatch::new(
            PiiType::Email,
            "john.doe@example.com",
            9,
            29,
            0.95,
        )];

        report.add_document("contacts.txt", &matches, 15);

        assert_eq!(report.total_documents, 1);
        assert_eq!(report.total_matches, 1);
        assert_eq!(report.stats.documents_with_pii, 1);
        assert_eq!(report.matches_by_type.get(&PiiType::Email), Some(&1));
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].document, "contacts.txt");
    }

    #[test]
    fn test_long_values_truncated_in_samples() {
        let mut report = ScanReport::new();
        let long_value = format!("{}@example.com", "a".repeat(90));
        let matches = vec![PiiMatch::new(PiiType::Email, long_value, 0, 102, 0.95)];

        report.add_document("long.txt", &matches, 5);

        assert!(report.samples[0].value.ends_with("..."));
        assert_eq!(report.samples[0].value.chars().count(), 50);
    }

    #[test]
    fn test_format_console() {
        let mut report = ScanReport::new();
        report.total_documents = 10;
        report.total_matches = 5;
        report.stats.documents_with_pii = 3;
        report.stats.documents_without_pii = 7;
        report.stats.avg_processing_time_ms = 12;

        let output = report.format_console();
        assert!(output.contains("PII SCAN REPORT"));
        assert!(output.contains("Documents Scanned:     10"));
        assert!(output.contains("Total Matches:         5"));
    }

    #[test]
    fn test_json_round_trip() {
        let mut report = ScanReport::new();
        let matches = vec![PiiMatch::new(PiiType::Phone, "555-123-4567", 0, 12, 0.90)];
        report.add_document("doc.txt", &matches, 2);

        let json = report.format_json().unwrap();
        let back: ScanReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_matches, 1);
        assert_eq!(back.matches_by_type.get(&PiiType::Phone), Some(&1));
    }
}

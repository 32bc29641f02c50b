//! Integration tests for detection-only scans and scan reporting

use cloak::redaction::{
    PiiType, RedactionEngine, RedactionOptions, ScanReport,
};

fn engine() -> RedactionEngine {
    RedactionEngine::new(RedactionOptions::default()).expect("Failed to create engine")
}

#[test]
fn test_scan_reports_without_rewriting() {
    let engine = engine();
    let matches = engine
        .scan("Email: a@b.com Phone: 555-123-4567")
        .expect("Failed to scan");

    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].pii_type, PiiType::Email);
    assert_eq!(matches[1].pii_type, PiiType::Phone);
}

#[test]
fn test_report_aggregates_documents() {
    let engine = engine();
    let mut report = ScanReport::new();

    let doc_one = engine.scan("mail a@b.com").expect("Failed to scan");
    report.add_document("one.txt", &doc_one, 3);

    let doc_two = engine
        .scan("totally clean content")
        .expect("Failed to scan");
    report.add_document("two.txt", &doc_two, 1);

    assert_eq!(report.total_documents, 2);
    assert_eq!(report.total_matches, 1);
    assert_eq!(report.stats.documents_with_pii, 1);
    assert_eq!(report.stats.documents_without_pii, 1);
    assert_eq!(report.stats.total_processing_time_ms, 4);
    assert_eq!(report.stats.avg_processing_time_ms, 2);
    assert_eq!(report.matches_by_type.get(&PiiType::Email), Some(&1));
}

#[test]
fn test_report_warnings_for_failed_documents() {
    let engine = engine();
    let mut report = ScanReport::new();

    match engine.scan("   ") {
        Ok(matches) => report.add_document("blank.txt", &matches, 0),
        Err(e) => report.add_warning(format!("blank.txt: {e}")),
    }

    assert_eq!(report.total_documents, 0);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("blank.txt"));
}

#[test]
fn test_console_report_contains_sections() {
    let engine = engine();
    let mut report = ScanReport::new();

    let matches = engine
        .scan("write to a@b.com or call 555-123-4567")
        .expect("Failed to scan");
    report.add_document("doc.txt", &matches, 5);

    let console = report.format_console();
    assert!(console.contains("PII SCAN REPORT"));
    assert!(console.contains("MATCHES BY TYPE"));
    assert!(console.contains("SAMPLE MATCHES"));
    assert!(console.contains("EMAIL"));
    assert!(console.contains("PHONE"));
    assert!(console.contains("doc.txt"));
}

#[test]
fn test_report_written_to_file() {
    let engine = engine();
    let mut report = ScanReport::new();

    let matches = engine.scan("mail a@b.com").expect("Failed to scan");
    report.add_document("doc.txt", &matches, 2);

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.json");
    report.write_to_file(&path).expect("Failed to write report");

    let content = std::fs::read_to_string(&path).expect("Failed to read report");
    let parsed: ScanReport = serde_json::from_str(&content).expect("Failed to parse report");
    assert_eq!(parsed.total_matches, report.total_matches);
}

#[test]
fn test_scan_respects_resolution() {
    let engine = engine();

    // "Main Street" inside the address must not appear as a separate match
    let matches = engine
        .scan("Ship to 123 Main Street today")
        .expect("Failed to scan");

    let overlapping_name = matches
        .iter()
        .any(|m| m.pii_type == PiiType::Name && m.value.contains("Main"));
    assert!(!overlapping_name);
}

//! Text extraction
//!
//! Flattens supported input files into one plain string for the redaction
//! engine. Only formats that are pure text processing are handled here
//! (TXT-like files, JSON, CSV, RTF); binary document formats (PDF, DOCX) and
//! OCR belong to external collaborators that hand the engine a finished
//! string.

use crate::domain::{ExtractionError, Result};
use regex::Regex;
use std::path::Path;

/// Extract plain text from a file, dispatching on its extension.
///
/// - `txt`, `text`, `md`, `log`: read as-is
/// - `json`: parsed and pretty-printed, so values land on separate lines
/// - `csv`: passed through as text
/// - `rtf`: control words and groups stripped
///
/// # Errors
///
/// Returns an extraction error for unreadable files, non-UTF-8 content,
/// invalid JSON, or unsupported extensions.
pub fn extract_text(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "txt" | "text" | "md" | "log" => read_utf8(path),
        "json" => extract_json(path),
        "csv" => read_utf8(path),
        "rtf" => extract_rtf(path),
        _ => Err(ExtractionError::UnsupportedFormat(display_name(path)).into()),
    }
}

/// Join pre-extracted documents with a caller-chosen separator.
///
/// The engine has no notion of document boundaries; callers that want one
/// combined run join their batch up front.
pub fn join_documents<S: AsRef<str>>(documents: &[S], separator: &str) -> String {
    documents
        .iter()
        .map(|d| d.as_ref())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Read a file and require valid UTF-8
fn read_utf8(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ExtractionError::ReadFailed {
        path: display_name(path),
        reason: e.to_string(),
    })?;

    String::from_utf8(bytes)
        .map_err(|_| ExtractionError::InvalidEncoding(display_name(path)).into())
}

/// Parse JSON and pretty-print it
fn extract_json(path: &Path) -> Result<String> {
    let content = read_utf8(path)?;

    let value: serde_json::Value =
        serde_json::from_str(&content).map_err(|e| ExtractionError::InvalidJson {
            path: display_name(path),
            reason: e.to_string(),
        })?;

    serde_json::to_string_pretty(&value).map_err(|e| {
        ExtractionError::InvalidJson {
            path: display_name(path),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Strip RTF control words, groups, and hex escapes
fn extract_rtf(path: &Path) -> Result<String> {
    let content = read_utf8(path)?;

    let paragraphs = Regex::new(r"\\pard?").unwrap();
    let hex_escapes = Regex::new(r"\\'[0-9a-fA-F]{2}").unwrap();
    let control = Regex::new(r"\{|\}|\\[^ ]+").unwrap();

    let text = paragraphs.replace_all(&content, "\n");
    let text = hex_escapes.replace_all(&text, "");
    let text = control.replace_all(&text, "");

    Ok(text.trim().to_string())
}

fn display_name(path: &Path) -> String {
    path.display().to_string()
}

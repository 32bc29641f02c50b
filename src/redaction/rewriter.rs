//! Match rewriting
//!
//! Replaces each surviving match with its redaction token. Matches MUST be
//! non-overlapping and processed in ascending original-start order: the
//! running offset accumulator tracks how prior substitutions shifted the
//! text, and any other order corrupts later substitutions.

use crate::redaction::models::{PiiMatch, PiiType, RedactionStyle};
use std::collections::HashMap;

/// Rewrite `text`, replacing every match with a redaction token.
///
/// - `Mask`: one `mask_char` per character of the matched span, so the
///   character length of the text is preserved.
/// - `Label`: `[<LABEL><n>]` with a per-type counter starting at 1, assigned
///   in the ascending-start order the matches are processed in.
pub fn rewrite(
    text: &str,
    matches: &[PiiMatch],
    style: RedactionStyle,
    mask_char: char,
) -> String {
    let mut redacted = text.to_string();
    let mut offset: isize = 0;
    let mut counters: HashMap<PiiType, usize> = HashMap::new();

    for m in matches {
        let token = match style {
            RedactionStyle::Mask => {
                let span_chars = text[m.start..m.end].chars().count();
                mask_char.to_string().repeat(span_chars)
            }
            RedactionStyle::Label => {
                let counter = counters.entry(m.pii_type).or_insert(0);
                *counter += 1;
                format!("[{}{}]", m.pii_type.label(), counter)
            }
        };

        let adjusted_start = (m.start as isize + offset) as usize;
        let adjusted_end = (m.end as isize + offset) as usize;
        redacted.replace_range(adjusted_start..adjusted_end, &token);

        offset += token.len() as isize - (m.end - m.start) as isize;
    }

    redacted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(pii_type: PiiType, value: &str, start: usize, end: usize) -> PiiMatch {
        PiiMatch::new(pii_type, value, start, end, 0.9)
    }

    #[test]
    fn test_label_rewrite() {
        let text = "mail a@b.com now";
        let matches = vec![m(PiiType::Email, "a@b.com", 5, 12)];
        let redacted = rewrite(text, &matches, RedactionStyle::Label, '█');

        assert_eq!(redacted, "mail [EMAIL1] now");
    }

    #[test]
    fn test_label_counters_are_per_type() {
        let text = "a@b.com 555-123-4567 c@d.org";
        let matches = vec![
            m(PiiType::Email, "a@b.com", 0, 7),
            m(PiiType::Phone, "555-123-4567", 8, 20),
            m(PiiType::Email, "c@d.org", 21, 28),
        ];
        let redacted = rewrite(text, &matches, RedactionStyle::Label, '█');

        assert_eq!(redacted, "[EMAIL1] [PHONE1] [EMAIL2]");
    }

    #[test]
    fn test_offset_tracking_with_longer_tokens() {
        // Labels are longer than the spans they replace; the accumulator
        // must keep later substitutions aligned.
        let text = "x a@b.c y d@e.f z";
        let matches = vec![
            m(PiiType::Email, "a@b.c", 2, 7),
            m(PiiType::Email, "d@e.f", 10, 15),
        ];
        let redacted = rewrite(text, &matches, RedactionStyle::Label, '█');

        assert_eq!(redacted, "x [EMAIL1] y [EMAIL2] z");
    }

    #[test]
    fn test_mask_preserves_char_length() {
        let text = "Call 555-1234";
        let matches = vec![m(PiiType::Phone, "555-1234", 5, 13)];
        let redacted = rewrite(text, &matches, RedactionStyle::Mask, '█');

        assert_eq!(redacted, "Call ████████");
        assert_eq!(redacted.chars().count(), text.chars().count());
    }

    #[test]
    fn test_mask_with_ascii_filler() {
        let text = "num 555-1234.";
        let matches = vec![m(PiiType::Phone, "555-1234", 4, 12)];
        let redacted = rewrite(text, &matches, RedactionStyle::Mask, '*');

        assert_eq!(redacted, "num ********.");
        assert_eq!(redacted.len(), text.len());
    }

    #[test]
    fn test_mask_counts_span_chars_not_bytes() {
        // Multibyte characters in the span: filler count follows characters
        let text = "ref 12 Rué Lane ok";
        let start = text.find("12").unwrap();
        let end = text.find(" ok").unwrap();
        let matches = vec![m(PiiType::Address, &text[start..end], start, end)];
        let redacted = rewrite(text, &matches, RedactionStyle::Mask, '█');

        assert_eq!(redacted.chars().count(), text.chars().count());
    }

    #[test]
    fn test_no_matches_returns_original() {
        assert_eq!(rewrite("untouched", &[], RedactionStyle::Label, '█'), "untouched");
    }
}

//! Conflict resolution over detector matches
//!
//! Detectors overlap in coverage (a numeric run inside an address can also
//! look like a phone number), so the merged match list must be reduced to a
//! non-overlapping subset before rewriting. The policy is first-fit interval
//! scheduling: sort by start, then a single left-to-right greedy pass. An
//! earlier-starting match permanently blocks any later overlapping one,
//! regardless of confidence or size. Downstream golden outputs are pinned to
//! this behavior; do not replace it with weighted interval scheduling.

use crate::redaction::models::PiiMatch;

/// Select a non-overlapping subset of matches.
///
/// The sort is stable: matches starting at the same offset keep their
/// emission order, which encodes detector priority (email, phone, name,
/// address) because the engine appends detector outputs in that sequence.
pub fn resolve(mut matches: Vec<PiiMatch>) -> Vec<PiiMatch> {
    matches.sort_by_key(|m| m.start);

    let mut accepted: Vec<PiiMatch> = Vec::new();
    for candidate in matches {
        let conflicts = accepted.iter().any(|existing| overlaps(&candidate, existing));
        if !conflicts {
            accepted.push(candidate);
        }
    }

    accepted
}

/// Overlap test between a candidate and an already-accepted match:
/// the candidate's start falls within `[start, end)` of the accepted match,
/// or its end falls within `(start, end]`.
fn overlaps(candidate: &PiiMatch, accepted: &PiiMatch) -> bool {
    (candidate.start >= accepted.start && candidate.start < accepted.end)
        || (candidate.end > accepted.start && candidate.end <= accepted.end)
}

//! Entity tokenization for delimited multi-value cells

use itertools::Itertools;

/// How many commas a cell must contain before comma is accepted as a
/// delimiter. Below this the cell is assumed to be a single
/// "Last, First" style name.
const COMMA_DELIMITER_THRESHOLD: usize = 2;

/// Split one cell into a clean, deduplicated, order-preserving sequence of
/// entity tokens.
///
/// Delimiters are tried in priority order: semicolon, pipe, then comma
/// (comma only when the cell holds more than two of them). A cell without
/// any accepted delimiter is one token. Candidates are trimmed and empty
/// ones dropped; with `case_fold` set, tokens are lowercased so that
/// "Machine Learning" and "machine learning" aggregate together.
///
/// Missing or blank cells yield an empty vec. This function never fails on
/// malformed input.
pub fn tokenize(cell: Option<&str>, case_fold: bool) -> Vec<String> {
    let raw = match cell {
        Some(s) => s.trim(),
        None => return Vec::new(),
    };
    if raw.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<&str> = if raw.contains(';') {
        raw.split(';').collect()
    } else if raw.contains('|') {
        raw.split('|').collect()
    } else if raw.matches(',').count() > COMMA_DELIMITER_THRESHOLD {
        raw.split(',').collect()
    } else {
        vec![raw]
    };

    candidates
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            if case_fold {
                t.to_lowercase()
            } else {
                t.to_string()
            }
        })
        .unique()
        .collect()
}

//! Unordered pair generation and co-occurrence counting

use itertools::Itertools;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Canonical unordered pair of two distinct entity tokens.
///
/// Endpoints are stored in lexicographic order so that (a, b) and (b, a)
/// aggregate under the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    /// Build a canonical key from two tokens. Returns `None` when the
    /// tokens are equal, since self-pairs carry no co-occurrence signal.
    pub fn new(x: &str, y: &str) -> Option<Self> {
        match x.cmp(y) {
            Ordering::Less => Some(Self {
                a: x.to_string(),
                b: y.to_string(),
            }),
            Ordering::Greater => Some(Self {
                a: y.to_string(),
                b: x.to_string(),
            }),
            Ordering::Equal => None,
        }
    }

    /// Endpoints in canonical order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

/// Accumulate co-occurrence counts over all rows.
///
/// Each row contributes every C(n, 2) unordered pair of its distinct
/// tokens exactly once, so a pair's count is the number of rows in which
/// the two entities appear together, not the number of raw occurrences.
/// Rows with fewer than two distinct tokens contribute nothing.
///
/// Pair generation is O(n^2) in the row's token count. Realistic author
/// and keyword lists are small, but a malformed cell can hold hundreds of
/// candidates, so each row is capped at `max_tokens_per_row` tokens
/// (first-seen order) before pairing.
pub fn aggregate_pairs(
    rows: &[Vec<String>],
    max_tokens_per_row: usize,
) -> HashMap<EdgeKey, u32> {
    let mut counts: HashMap<EdgeKey, u32> = HashMap::new();

    for row in rows {
        let distinct: Vec<&String> = row.iter().unique().take(max_tokens_per_row).collect();
        if distinct.len() < 2 {
            continue;
        }

        for (x, y) in distinct.into_iter().tuple_combinations() {
            if let Some(key) = EdgeKey::new(x, y) {
                *counts.entry(key).or_insert(0) += 1;
            }
        }
    }

    counts
}

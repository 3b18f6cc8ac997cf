use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strsim::normalized_levenshtein;

/// Minimum similarity score (0-100) a candidate must reach to be accepted.
pub const DEFAULT_THRESHOLD: u8 = 60;

/// The best catalog entry for a query, with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Canonical catalog entry that matched.
    pub name: String,
    /// Similarity score in [0, 100].
    pub score: u8,
}

/// Normalize free-text input for comparison: trim, lowercase, collapse
/// internal whitespace runs to a single space.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Similarity score in [0, 100] between a query and a catalog entry.
///
/// Takes the better of a whole-string edit-distance ratio and a token-set
/// ratio, so both single-word typos ("rise" vs "rice") and reordered or
/// partially-overlapping multi-word names score high. Equal strings
/// (modulo case and whitespace) always score 100.
pub fn similarity(query: &str, candidate: &str) -> u8 {
    let q = normalize(query);
    let c = normalize(candidate);
    if q.is_empty() || c.is_empty() {
        return 0;
    }
    ratio(&q, &c).max(token_set_ratio(&q, &c))
}

/// Resolve free-text input against a catalog of canonical names.
///
/// Returns the single highest-scoring entry, ties broken by first
/// occurrence in candidate iteration order. The threshold is a hard gate:
/// a below-threshold best match resolves to `None`.
pub fn resolve_best<'a, I>(query: &str, candidates: I, threshold: u8) -> Option<MatchResult>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<MatchResult> = None;
    for candidate in candidates {
        let score = similarity(query, candidate);
        let better = match &best {
            None => true,
            Some(current) => score > current.score,
        };
        if better {
            best = Some(MatchResult {
                name: candidate.to_string(),
                score,
            });
        }
    }
    best.filter(|m| m.score >= threshold)
}

/// Whole-string edit-distance ratio, scaled to [0, 100].
fn ratio(a: &str, b: &str) -> u8 {
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

/// Token-set ratio: split both strings into unique tokens and compare the
/// shared-token core against each side's full token set. Insensitive to
/// word order and forgiving of extra tokens on one side.
fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split(' ').collect();
    let tokens_b: BTreeSet<&str> = b.split(' ').collect();

    let shared: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let core = shared.join(" ");
    let full_a = join_parts(&core, &only_a);
    let full_b = join_parts(&core, &only_b);

    let mut best = ratio(&full_a, &full_b);
    if !core.is_empty() {
        best = best.max(ratio(&core, &full_a));
        best = best.max(ratio(&core, &full_b));
    }
    best
}

fn join_parts(core: &str, rest: &[&str]) -> String {
    if rest.is_empty() {
        core.to_string()
    } else if core.is_empty() {
        rest.join(" ")
    } else {
        format!("{} {}", core, rest.join(" "))
    }
}

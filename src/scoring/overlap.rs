//! Pairwise lexical overlap between token bags.

use crate::nlp::tokenizer::TokenBag;

/// Symmetric overlap similarity in `[0, 1)`.
///
/// Zero when either bag has fewer than `min_tokens` token occurrences.
/// Otherwise, for every token present in both bags the counts from both
/// sides are summed, and the total is divided by `len(a) + len(b) + 1`.
pub fn overlap_score(a: &TokenBag, b: &TokenBag, min_tokens: usize) -> f64 {
    let (len_a, len_b) = (a.total(), b.total());
    if len_a < min_tokens || len_b < min_tokens {
        return 0.0;
    }

    let (small, large) = if a.distinct() <= b.distinct() {
        (a, b)
    } else {
        (b, a)
    };

    let shared: usize = small
        .iter()
        .filter_map(|(token, count)| match large.count(token) {
            0 => None,
            other => Some(count + other),
        })
        .sum();

    shared as f64 / (len_a + len_b + 1) as f64
}

//! Key-point formatting
//!
//! Strips a leading "and"/"but" connective that reads awkwardly once the
//! sentence is pulled out of context, and terminates every point with a
//! period.

/// Connective prefixes, matched case-insensitively.
const CONNECTIVES: [&str; 4] = ["and ", "but ", "and,", "but,"];

/// Format one selected sentence as a key point.
pub fn format_point(sentence: &str) -> String {
    let mut point = strip_connective(sentence);
    point.push('.');
    point
}

/// Remove a leading connective and capitalize what follows.
///
/// Whitespace after the connective is trimmed rather than a fixed number of
/// characters being dropped, so `"and,finally"` keeps its `f`. Sentences
/// without a connective, or with nothing after it, are returned as-is.
pub fn strip_connective(sentence: &str) -> String {
    for prefix in CONNECTIVES {
        let matches = sentence
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix));
        if !matches {
            continue;
        }

        let rest = sentence[prefix.len()..].trim_start();
        if rest.is_empty() {
            break;
        }
        return capitalize_first(rest);
    }

    sentence.to_string()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//! Paragraph and sentence segmentation
//!
//! A punctuation heuristic: paragraphs end at blank lines, sentences end at
//! `.`, `?` or `!` immediately followed by a space. Abbreviations, decimal
//! numbers and quotations are not special-cased.

use crate::types::Sentence;

/// Characters that end a sentence when followed by a space.
const TERMINATORS: [char; 3] = ['.', '?', '!'];

/// Split text into paragraphs at blank lines.
///
/// Whitespace inside each paragraph is collapsed to single spaces, and empty
/// paragraphs are dropped.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            flush_paragraph(&mut current, &mut paragraphs);
        } else {
            current.push(line);
        }
    }
    flush_paragraph(&mut current, &mut paragraphs);

    paragraphs
}

fn flush_paragraph(lines: &mut Vec<&str>, paragraphs: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let collapsed = collapse_whitespace(&lines.join(" "));
    if !collapsed.is_empty() {
        paragraphs.push(collapsed);
    }
    lines.clear();
}

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split one whitespace-collapsed paragraph into sentence fragments.
///
/// The terminator stays on the fragment it ends; each fragment is trimmed,
/// loses one trailing `.`, and is dropped if nothing remains.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut fragments = Vec::new();
    let mut start = 0;
    let mut chars = paragraph.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if TERMINATORS.contains(&ch) && matches!(chars.peek(), Some((_, ' '))) {
            let end = i + ch.len_utf8();
            fragments.push(&paragraph[start..end]);
            start = end;
        }
    }
    fragments.push(&paragraph[start..]);

    fragments
        .into_iter()
        .map(clean_fragment)
        .filter(|f| !f.is_empty())
        .collect()
}

fn clean_fragment(fragment: &str) -> &str {
    let trimmed = fragment.trim();
    match trimmed.strip_suffix('.') {
        Some(stripped) => stripped.trim_end(),
        None => trimmed,
    }
}

/// Segment a document into sentences in document order.
///
/// Each sentence gets its position in the flattened list as its index.
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();

    for (paragraph_idx, paragraph) in split_paragraphs(text).iter().enumerate() {
        for fragment in split_sentences(paragraph) {
            let index = sentences.len();
            sentences.push(Sentence::new(fragment, index, paragraph_idx));
        }
    }

    sentences
}

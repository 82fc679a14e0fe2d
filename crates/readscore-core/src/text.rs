//! Text segmentation: sentences and words.
//!
//! Both splitters are simple heuristics. They do not recognize abbreviations
//! ("Mr. Smith"), ellipses, or quoted dialogue.

use regex::Regex;
use std::sync::LazyLock;

/// A terminator, the whitespace after it, and the uppercase letter that opens
/// the next sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+[A-Z]").expect("valid regex"));

/// Sentences and words extracted from one input, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet {
    /// Trimmed, non-empty sentence fragments.
    pub sentences: Vec<String>,
    /// Word tokens with punctuation removed and case preserved.
    pub words: Vec<String>,
}

impl TokenSet {
    /// Number of sentences.
    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Split `text` into sentences and words.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn tokenize(text: &str) -> TokenSet {
    TokenSet {
        sentences: split_sentences(text),
        words: extract_words(text),
    }
}

/// Split text into sentences.
///
/// A boundary is `.`, `!` or `?`, then whitespace, then an uppercase ASCII
/// letter. The terminator stays with the sentence it ends. Fragments that are
/// empty after trimming are dropped, so whitespace-only input yields nothing.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // The match is `<terminator><whitespace><uppercase>`; all three are
        // single-byte ASCII except the whitespace run.
        let end = boundary.start() + 1;
        push_fragment(&mut sentences, &text[start..end]);
        start = boundary.end() - 1;
    }
    push_fragment(&mut sentences, &text[start..]);

    sentences
}

fn push_fragment(sentences: &mut Vec<String>, fragment: &str) {
    let fragment = fragment.trim();
    if !fragment.is_empty() {
        sentences.push(fragment.to_string());
    }
}

/// Extract words from text.
///
/// Every character that is not a letter, digit, apostrophe, or whitespace is
/// removed first, then the remainder is split on whitespace. Removal happens
/// before splitting, so "well-known" becomes the single token "wellknown".
pub fn extract_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .filter(|&c| c.is_alphanumeric() || c == '\'' || c.is_whitespace())
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

/// Count letters in text, ignoring whitespace, digits, and punctuation.
pub fn count_letters(text: &str) -> usize {
    text.chars().filter(|c| c.is_alphabetic()).count()
}

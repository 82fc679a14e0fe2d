//! Heuristic syllable estimation.
//!
//! No dictionary is consulted. The estimate approximates silent endings and
//! diphthongs with a handful of string rules, and irregular words come out
//! wrong in predictable ways. Every score in [`crate::metrics`] depends on
//! these exact rules.

use regex::Regex;
use std::sync::LazyLock;

/// A vowel-like nucleus: one or two characters from `aeiouy`.
static NUCLEUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Syllable count above which a word is considered complex.
pub const COMPLEX_WORD_THRESHOLD: usize = 2;

/// Estimate the number of syllables in a single word.
///
/// Returns 0 when the word contains no ASCII letters (e.g. `"42"`), and at
/// least 1 otherwise.
pub fn count_syllables(word: &str) -> usize {
    let letters: String = word
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let stem = strip_leading_y(strip_silent_suffix(&letters));
    NUCLEUS.find_iter(stem).count().max(1)
}

/// Sum syllable estimates over a sequence of words.
pub fn count_syllables_in<I, S>(words: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words
        .into_iter()
        .map(|w| count_syllables(w.as_ref()))
        .sum()
}

/// Whether a word has more than [`COMPLEX_WORD_THRESHOLD`] syllables.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) > COMPLEX_WORD_THRESHOLD
}

/// Drop one trailing `es`, `ed`, or `e` when a consonant precedes it.
///
/// Expects lowercase ASCII input.
fn strip_silent_suffix(word: &str) -> &str {
    for suffix in ["es", "ed", "e"] {
        if let Some(rest) = word.strip_suffix(suffix)
            && rest.bytes().last().is_some_and(is_consonant)
        {
            return rest;
        }
    }
    word
}

fn strip_leading_y(word: &str) -> &str {
    word.strip_prefix('y').unwrap_or(word)
}

const fn is_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !matches!(b, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

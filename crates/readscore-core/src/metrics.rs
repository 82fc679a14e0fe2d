//! Readability formulas.
//!
//! Five classic scores computed from one pass over the text:
//!
//! | Score                | Formula                                              |
//! |----------------------|------------------------------------------------------|
//! | Flesch Reading Ease  | `206.835 - 1.015 * (W/S) - 84.6 * (Sy/W)`, in 0..=100 |
//! | Flesch-Kincaid Grade | `0.39 * (W/S) + 11.8 * (Sy/W) - 15.59`, floored at 0  |
//! | Gunning Fog          | `0.4 * ((W/S) + 100 * (Y/W))`, floored at 0           |
//! | Coleman-Liau         | `0.0588 * L - 0.296 * SL - 15.8`, floored at 0        |
//! | SMOG                 | `1.043 * sqrt(Y * 30/S) + 3.1291`, 0 below 3 sentences |
//!
//! `W` words, `S` sentences, `Sy` syllables, `Y` complex words (more than two
//! syllables), `L` letters per 100 words, `SL` sentences per 100 words.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;
use crate::text;

/// Minimum sentence count for a SMOG estimate.
pub const SMOG_MIN_SENTENCES: usize = 3;

/// Counts, averages, and scores for one piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Metrics {
    /// Number of sentences.
    pub sentence_count: usize,
    /// Number of words.
    pub word_count: usize,
    /// Number of letters (no whitespace, digits, or punctuation).
    pub character_count: usize,
    /// Estimated syllables across all words.
    pub syllable_count: usize,
    /// Words with more than two estimated syllables.
    pub complex_word_count: usize,
    /// Words per sentence.
    pub average_words_per_sentence: f64,
    /// Syllables per word.
    pub average_syllables_per_word: f64,
    /// Flesch Reading Ease, 0 (hardest) to 100 (easiest).
    pub flesch_reading_ease: f64,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: f64,
    /// Gunning Fog Index.
    pub gunning_fog_index: f64,
    /// Coleman-Liau Index.
    pub coleman_liau_index: f64,
    /// SMOG Index. Zero for fewer than three sentences.
    pub smog_index: f64,
}

/// Score `text`.
///
/// Returns `None` when the text has no words or no sentences. That is "not
/// enough input", not an error.
pub fn analyze(text: &str) -> Option<Metrics> {
    compute_metrics(text)
}

/// Tokenize `text` and compute every count and score.
///
/// Returns `None` when the word or sentence count is zero, so no ratio is
/// ever taken over an empty denominator.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn compute_metrics(text: &str) -> Option<Metrics> {
    let tokens = text::tokenize(text);
    let sentence_count = tokens.sentence_count();
    let word_count = tokens.word_count();

    if word_count == 0 || sentence_count == 0 {
        tracing::debug!(sentence_count, word_count, "not enough text to score");
        return None;
    }

    let per_word: Vec<usize> = tokens
        .words
        .iter()
        .map(|w| syllables::count_syllables(w))
        .collect();
    let syllable_count: usize = per_word.iter().sum();
    let complex_word_count = per_word
        .iter()
        .filter(|&&n| n > syllables::COMPLEX_WORD_THRESHOLD)
        .count();
    let character_count = text::count_letters(text);

    let words = word_count as f64;
    let sentences = sentence_count as f64;
    let words_per_sentence = words / sentences;
    let syllables_per_word = syllable_count as f64 / words;

    let metrics = Metrics {
        sentence_count,
        word_count,
        character_count,
        syllable_count,
        complex_word_count,
        average_words_per_sentence: words_per_sentence,
        average_syllables_per_word: syllables_per_word,
        flesch_reading_ease: flesch_reading_ease(words_per_sentence, syllables_per_word),
        flesch_kincaid_grade: flesch_kincaid_grade(words_per_sentence, syllables_per_word),
        gunning_fog_index: gunning_fog_index(words_per_sentence, complex_word_count as f64 / words),
        coleman_liau_index: coleman_liau_index(character_count as f64 / words, sentences / words),
        smog_index: smog_index(complex_word_count, sentence_count),
    };

    tracing::debug!(
        sentence_count,
        word_count,
        syllable_count,
        ease = metrics.flesch_reading_ease,
        grade = metrics.flesch_kincaid_grade,
        "text scored"
    );
    Some(metrics)
}

/// Flesch Reading Ease, clamped into `0.0..=100.0`.
pub fn flesch_reading_ease(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    let score = 84.6f64.mul_add(
        -syllables_per_word,
        1.015f64.mul_add(-words_per_sentence, 206.835),
    );
    score.clamp(0.0, 100.0)
}

/// Flesch-Kincaid Grade Level, floored at 0.
pub fn flesch_kincaid_grade(words_per_sentence: f64, syllables_per_word: f64) -> f64 {
    let grade = 0.39f64.mul_add(words_per_sentence, 11.8 * syllables_per_word) - 15.59;
    grade.max(0.0)
}

/// Gunning Fog Index, floored at 0. `complex_ratio` is complex words per word.
pub fn gunning_fog_index(words_per_sentence: f64, complex_ratio: f64) -> f64 {
    (0.4 * 100.0f64.mul_add(complex_ratio, words_per_sentence)).max(0.0)
}

/// Coleman-Liau Index, floored at 0.
///
/// Both arguments are per-word ratios; the formula scales them to "per 100
/// words" itself.
pub fn coleman_liau_index(letters_per_word: f64, sentences_per_word: f64) -> f64 {
    let letters_per_100 = letters_per_word * 100.0;
    let sentences_per_100 = sentences_per_word * 100.0;
    let index = 0.296f64.mul_add(-sentences_per_100, 0.0588 * letters_per_100) - 15.8;
    index.max(0.0)
}

/// SMOG Index. Defined as 0 below [`SMOG_MIN_SENTENCES`] sentences instead of
/// extrapolating from a tiny sample.
pub fn smog_index(complex_words: usize, sentences: usize) -> f64 {
    if sentences < SMOG_MIN_SENTENCES {
        return 0.0;
    }
    let scaled = complex_words as f64 * (30.0 / sentences as f64);
    1.043f64.mul_add(scaled.sqrt(), 3.1291)
}

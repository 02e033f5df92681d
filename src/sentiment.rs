// src/sentiment.rs
//! Lexicon sentiment scores.
//!
//! Positive/negative scores count *distinct* words found in each lexicon, not
//! occurrences: "good good good" scores 1. Word-level statistics elsewhere are
//! per occurrence; the two are intentionally different.

use std::collections::HashSet;

use crate::lexicon::Lexicon;

/// Guards the ratio denominators when both scores (or the word count) are zero.
pub const EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    pub positive: usize,
    pub negative: usize,
    pub polarity: f64,
    pub subjectivity: f64,
}

/// Number of distinct `words` present in `lexicon`.
pub fn lexicon_hits<S: AsRef<str>>(words: &[S], lexicon: &Lexicon) -> usize {
    words
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| lexicon.contains(w))
        .collect::<HashSet<&str>>()
        .len()
}

/// (P − N) / (P + N + ε), always within [-1, 1].
pub fn polarity(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / ((positive + negative) as f64 + EPSILON)
}

/// (P + N) / (word_count + ε).
pub fn subjectivity(positive: usize, negative: usize, word_count: usize) -> f64 {
    (positive + negative) as f64 / (word_count as f64 + EPSILON)
}

/// Score normalized words against the positive and negative lexicons.
pub fn score_words<S: AsRef<str>>(
    words: &[S],
    positive: &Lexicon,
    negative: &Lexicon,
) -> SentimentScores {
    let p = lexicon_hits(words, positive);
    let n = lexicon_hits(words, negative);
    SentimentScores {
        positive: p,
        negative: n,
        polarity: polarity(p, n),
        subjectivity: subjectivity(p, n, words.len()),
    }
}

//! # Metrics Engine
//! Pure per-document computation: `Document` → `MetricsRecord`.
//! No I/O; lexicons are shared read-only, every counter is local to one call.
//!
//! Order matters for the numbers:
//! - complex words are classified on the *pre*-stopword token list and divided by
//!   that list's length,
//! - syllables per word and average word length use the *post*-stopword list.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::ingest::Document;
use crate::lexicon::Lexicons;
use crate::normalize::normalize_words;
use crate::record::{DocumentMetrics, MetricsRecord};
use crate::sentiment::score_words;
use crate::syllables::{is_complex, syllable_estimate};
use crate::tokenize;

/// Weight of the Gunning fog index.
const FOG_WEIGHT: f64 = 0.4;

#[derive(Debug, Clone)]
pub struct MetricsEngine {
    lexicons: Arc<Lexicons>,
}

impl MetricsEngine {
    pub fn new(lexicons: Lexicons) -> Self {
        Self::shared(Arc::new(lexicons))
    }

    pub fn shared(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Compute the full record for one document. Empty text yields the
    /// undefined record without tokenizing.
    pub fn analyse(&self, doc: &Document) -> MetricsRecord {
        if doc.text.is_empty() {
            debug!(target: "engine", id = %doc.id, "empty document; undefined record");
            return MetricsRecord::undefined(&doc.id, &doc.url);
        }

        let sentences = tokenize::sentences(&doc.text);
        let normalized = normalize_words(tokenize::words(&doc.text));
        let words = normalized.words;
        let word_count_raw = words.len();
        let sentence_count = sentences.len();

        let lex = &*self.lexicons;
        let sentiment = score_words(&words, &lex.positive, &lex.negative);

        let avg_sentence_length = ratio(word_count_raw, sentence_count);
        let complex_word_count = words.iter().filter(|w| is_complex(w)).count();
        let percentage_complex_words = ratio(complex_word_count, word_count_raw);
        let fog_index = FOG_WEIGHT * (avg_sentence_length + percentage_complex_words);
        let avg_words_per_sentence = ratio(word_count_raw, sentence_count);

        let filtered: Vec<&str> = words
            .iter()
            .map(String::as_str)
            .filter(|w| !lex.stopwords.contains(w))
            .collect();
        let word_count = filtered.len();
        let syllables_per_word = ratio(
            filtered.iter().map(|w| syllable_estimate(w)).sum(),
            word_count,
        );
        let avg_word_length = ratio(filtered.iter().map(|w| w.len()).sum(), word_count);

        debug!(
            target: "engine",
            id = %doc.id,
            fingerprint = %fingerprint(&doc.text),
            sentences = sentence_count,
            words = word_count_raw,
            filtered = word_count,
            "document analysed"
        );

        MetricsRecord::computed(
            &doc.id,
            &doc.url,
            DocumentMetrics {
                positive_score: sentiment.positive,
                negative_score: sentiment.negative,
                polarity_score: sentiment.polarity,
                subjectivity_score: sentiment.subjectivity,
                avg_sentence_length,
                percentage_complex_words,
                fog_index,
                avg_words_per_sentence,
                complex_word_count,
                word_count,
                syllables_per_word,
                personal_pronouns: normalized.personal_pronouns,
                avg_word_length,
            },
        )
    }
}

/// `num / den`, or `0.0` when there is nothing to divide by.
fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Short SHA-256 prefix used to correlate log lines without logging raw text.
pub(crate) fn fingerprint(text: &str) -> String {
    use std::fmt::Write as _;
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}

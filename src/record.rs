// src/record.rs
//! Metrics record: one per analysed document, either fully computed or fully
//! undefined (empty document). The split is carried by the type, so a partially
//! filled record cannot exist.

use serde::{Deserialize, Serialize};

/// Output columns, in the order every sink must emit them.
pub const OUTPUT_FIELDS: [&str; 15] = [
    "URL_ID",
    "URL",
    "POSITIVE SCORE",
    "NEGATIVE SCORE",
    "SUBJECTIVITY SCORE",
    "POLARITY SCORE",
    "AVG SENTENCE LENGTH",
    "PERCENTAGE OF COMPLEX WORDS",
    "FOG INDEX",
    "AVG NUMBER OF WORDS PER SENTENCE",
    "COMPLEX WORD COUNT",
    "WORD COUNT",
    "SYLLABLE PER WORD",
    "PERSONAL PRONOUNS",
    "AVG WORD LENGTH",
];

/// Cell written for every numeric column of an undefined record.
pub const UNDEFINED_CELL: &str = "NaN";

/// The per-document numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetrics {
    pub positive_score: usize,
    pub negative_score: usize,
    pub polarity_score: f64,
    pub subjectivity_score: f64,
    pub avg_sentence_length: f64,
    pub percentage_complex_words: f64,
    pub fog_index: f64,
    pub avg_words_per_sentence: f64,
    pub complex_word_count: usize,
    /// Words left after stopword removal.
    pub word_count: usize,
    pub syllables_per_word: f64,
    pub personal_pronouns: usize,
    pub avg_word_length: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub id: String,
    pub url: String,
    /// `None` when the document had no text.
    pub metrics: Option<DocumentMetrics>,
}

impl MetricsRecord {
    pub fn computed(id: impl Into<String>, url: impl Into<String>, m: DocumentMetrics) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            metrics: Some(m),
        }
    }

    /// Sentinel record for an empty document.
    pub fn undefined(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            metrics: None,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.metrics.is_none()
    }

    /// Cells in [`OUTPUT_FIELDS`] order.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(OUTPUT_FIELDS.len());
        row.push(self.id.clone());
        row.push(self.url.clone());
        match &self.metrics {
            Some(m) => row.extend([
                m.positive_score.to_string(),
                m.negative_score.to_string(),
                float_cell(m.subjectivity_score),
                float_cell(m.polarity_score),
                float_cell(m.avg_sentence_length),
                float_cell(m.percentage_complex_words),
                float_cell(m.fog_index),
                float_cell(m.avg_words_per_sentence),
                m.complex_word_count.to_string(),
                m.word_count.to_string(),
                float_cell(m.syllables_per_word),
                m.personal_pronouns.to_string(),
                float_cell(m.avg_word_length),
            ]),
            None => row.extend((2..OUTPUT_FIELDS.len()).map(|_| UNDEFINED_CELL.to_string())),
        }
        row
    }
}

/// Floats keep a decimal point (`1.0`, not `1`) so columns read as floats.
fn float_cell(x: f64) -> String {
    format!("{x:?}")
}

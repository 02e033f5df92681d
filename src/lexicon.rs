//! # Lexicons
//!
//! Three immutable word sets drive scoring: positive words, negative words and
//! stopwords. They are loaded once per run and shared read-only.
//!
//! File formats:
//! - positive / negative: one word per line; blank lines and `;` comments skipped.
//!   Decoded lossily since the public master dictionaries ship in Latin-1.
//! - stopwords: a directory of list files; the first whitespace-separated token of
//!   each line is the stopword (lines often carry a `| comment` tail).

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::LexiconError;

/// An immutable set of lowercase words.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
}

impl Lexicon {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// The three lexicons the engine scores against.
#[derive(Debug, Clone, Default)]
pub struct Lexicons {
    pub positive: Lexicon,
    pub negative: Lexicon,
    pub stopwords: Lexicon,
}

impl Lexicons {
    /// Build lexicons from in-memory word lists.
    pub fn from_words<P, N, S>(positive: P, negative: N, stopwords: S) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            positive: Lexicon::from_words(positive),
            negative: Lexicon::from_words(negative),
            stopwords: Lexicon::from_words(stopwords),
        }
    }

    /// Load all three lexicons from disk. Any failure aborts the run.
    pub fn load(
        positive: &Path,
        negative: &Path,
        stopwords_dir: &Path,
    ) -> Result<Self, LexiconError> {
        let lex = Self {
            positive: Lexicon::from_words(load_word_list(positive)?),
            negative: Lexicon::from_words(load_word_list(negative)?),
            stopwords: Lexicon::from_words(load_stopwords_dir(stopwords_dir)?),
        };
        info!(
            target: "lexicon",
            positive = lex.positive.len(),
            negative = lex.negative.len(),
            stopwords = lex.stopwords.len(),
            "lexicons loaded"
        );
        Ok(lex)
    }
}

/// Read a one-word-per-line list (positive or negative words).
pub fn load_word_list(path: &Path) -> Result<Vec<String>, LexiconError> {
    let bytes = fs::read(path).map_err(|source| LexiconError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_word_list(&String::from_utf8_lossy(&bytes)))
}

/// Read every file in `dir` and collect the first token of each line.
/// Files are visited in sorted order so runs are reproducible.
pub fn load_stopwords_dir(dir: &Path) -> Result<Vec<String>, LexiconError> {
    let read_dir_err = |source| LexiconError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(read_dir_err)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir_err)?
        .into_iter()
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();

    let mut out = Vec::new();
    for path in files {
        let bytes = fs::read(&path).map_err(|source| LexiconError::ReadFile {
            path: path.clone(),
            source,
        })?;
        out.extend(parse_stopword_list(&String::from_utf8_lossy(&bytes)));
    }
    Ok(out)
}

fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with(';'))
        .map(str::to_lowercase)
        .collect()
}

fn parse_stopword_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|l| l.split_whitespace().next())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_skips_blanks_and_comments() {
        let raw = "; Loughran-McDonald header\n\nAble\n  abundance \n;trailing\n";
        assert_eq!(parse_word_list(raw), vec!["able", "abundance"]);
    }

    #[test]
    fn stopword_list_takes_first_token() {
        let raw = "SMITH | Surnames from 1990 census\nJOHNSON\n\n   \nABOUT  extra";
        assert_eq!(parse_stopword_list(raw), vec!["smith", "johnson", "about"]);
    }

    #[test]
    fn lexicon_lowercases_and_dedups() {
        let lex = Lexicon::from_words(["Good", "good", " GREAT ", ""]);
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("good"));
        assert!(lex.contains("great"));
        assert!(!lex.contains("Good"));
    }
}

// src/tokenize.rs
//! Sentence and word tokenizers.
//!
//! Sentences: split after a run of `.`, `!` or `?` (plus closing quotes/brackets)
//! followed by whitespace, unless the period ends a known abbreviation or an
//! initialism such as `U.S.`. Paragraph breaks (blank lines) also end a sentence.
//!
//! Words: Treebank-style. Clitics are split off their host (`I'm` → `I`, `'m`;
//! `don't` → `do`, `n't`) so pronouns stay visible to the normalizer.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_BOUNDARY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?]+["'\u{201D}\u{2019})\]]*\s+|\n[ \t]*\n\s*"#).expect("boundary regex")
});

static RE_INITIALISM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z](?:\.[A-Za-z])+$").expect("initialism regex"));

static RE_NEG_CLITIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([a-z])(n't)\b").expect("n't regex"));

static RE_CLITIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([a-z])('(?:s|m|d|ll|re|ve))\b").expect("clitic regex"));

static RE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"'[A-Za-z]+|[A-Za-z0-9]+(?:[.'\-][A-Za-z0-9]+)*|[^\sA-Za-z0-9]")
        .expect("word regex")
});

const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "inc", "ltd", "co",
    "corp", "fig", "e.g", "i.e", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec",
];

/// Split `text` into sentences (trimmed, never empty).
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for m in RE_BOUNDARY.find_iter(text) {
        let terminator = m.as_str().trim_start();
        if terminator.starts_with('.')
            && !terminator.starts_with("..")
            && ends_with_abbreviation(&text[start..m.start()])
        {
            continue;
        }
        push_trimmed(&mut out, &text[start..m.end()]);
        start = m.end();
    }
    push_trimmed(&mut out, &text[start..]);
    out
}

/// Split `text` into raw word tokens (punctuation kept as separate tokens).
pub fn words(text: &str) -> Vec<String> {
    let text = text.replace(['\u{2018}', '\u{2019}'], "'");
    let text = RE_NEG_CLITIC.replace_all(&text, "$1 $2");
    let text = RE_CLITIC.replace_all(&text, "$1 $2");
    RE_WORD
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, s: &'a str) {
    let t = s.trim();
    if !t.is_empty() {
        out.push(t);
    }
}

fn ends_with_abbreviation(segment: &str) -> bool {
    let Some(last) = segment.split_whitespace().last() else {
        return false;
    };
    let last = last.trim_start_matches(|c: char| !c.is_ascii_alphanumeric());
    if last.is_empty() {
        return false;
    }
    RE_INITIALISM.is_match(last) || ABBREVIATIONS.contains(&last.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation() {
        let s = sentences("I love this great product. It works well! Does it? Yes.");
        assert_eq!(
            s,
            vec!["I love this great product.", "It works well!", "Does it?", "Yes."]
        );
    }

    #[test]
    fn keeps_abbreviations_and_initialisms_together() {
        let s = sentences("Mr. Smith moved to the U.S. last year. He likes it.");
        assert_eq!(s, vec!["Mr. Smith moved to the U.S. last year.", "He likes it."]);
    }

    #[test]
    fn single_letter_before_period_still_ends_sentence() {
        let s = sentences("I prefer plan B. It works.");
        assert_eq!(s, vec!["I prefer plan B.", "It works."]);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(sentences("no punctuation here"), vec!["no punctuation here"]);
    }

    #[test]
    fn whitespace_only_has_no_sentences() {
        assert!(sentences("  \n\t ").is_empty());
    }

    #[test]
    fn paragraph_break_ends_sentence() {
        let s = sentences("A headline\n\nBody text follows.");
        assert_eq!(s, vec!["A headline", "Body text follows."]);
    }

    #[test]
    fn words_split_clitics_and_punctuation() {
        let w = words("I'm sure we don't care, US.");
        assert_eq!(w, vec!["I", "'m", "sure", "we", "do", "n't", "care", ",", "US", "."]);
    }

    #[test]
    fn words_keep_hyphens_and_initialisms() {
        let w = words("A well-known U.S. firm");
        assert_eq!(w, vec!["A", "well-known", "U.S", ".", "firm"]);
    }

    #[test]
    fn curly_apostrophes_are_folded() {
        let w = words("we\u{2019}re");
        assert_eq!(w, vec!["we", "'re"]);
    }
}

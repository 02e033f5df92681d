// src/normalize.rs
//! Word normalizer: raw tokens → comparable lowercase alphabetic tokens.
//!
//! Personal pronouns are detected on the stripped token *before* lowercasing, so
//! the country acronym `US` never counts while `us` does. The count travels with
//! the output instead of living on the engine.

/// Case-sensitive personal pronoun forms. `US` is deliberately absent.
const PERSONAL_PRONOUNS: &[&str] = &["I", "we", "my", "ours", "us"];

/// Output of [`normalize_words`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Cleaned tokens in input order, duplicates kept.
    pub words: Vec<String>,
    pub personal_pronouns: usize,
}

/// Strip everything that is not an ASCII letter or whitespace, then trim.
pub fn strip_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

#[inline]
pub fn is_personal_pronoun(token: &str) -> bool {
    PERSONAL_PRONOUNS.contains(&token)
}

/// Clean a sequence of raw word tokens and count personal pronouns.
pub fn normalize_words<I, S>(raw: I) -> Normalized
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Normalized::default();
    for tok in raw {
        let cleaned = strip_token(tok.as_ref());
        if is_personal_pronoun(&cleaned) {
            out.personal_pronouns += 1;
        }
        let lower = cleaned.to_ascii_lowercase();
        if !lower.is_empty() {
            out.words.push(lower);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_letters_and_lowercases() {
        let n = normalize_words(["Hello,", "world!", "42", "well-known", "'s", "."]);
        assert_eq!(n.words, vec!["hello", "world", "wellknown", "s"]);
        assert_eq!(n.personal_pronouns, 0);
    }

    #[test]
    fn counts_pronouns_case_sensitively() {
        let n = normalize_words(["I", "we", "We", "my", "ours", "us", "US", "me"]);
        // "We" (capitalised) and "US" do not match; "me" is not in the set.
        assert_eq!(n.personal_pronouns, 5);
        assert_eq!(n.words.len(), 8);
    }

    #[test]
    fn pronoun_detected_after_stripping_punctuation() {
        let n = normalize_words(["\"I", "us."]);
        assert_eq!(n.personal_pronouns, 2);
        assert_eq!(n.words, vec!["i", "us"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let n = normalize_words(["good", "Good", "bad", "good"]);
        assert_eq!(n.words, vec!["good", "good", "bad", "good"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        let n = normalize_words(Vec::<String>::new());
        assert_eq!(n, Normalized::default());
    }
}

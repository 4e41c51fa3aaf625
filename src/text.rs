use std::sync::LazyLock;

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

use crate::constants::{MIN_TOKEN_CHARS, STOP_WORDS};

/// Anything that is not a letter, a number, `_` or whitespace. Combining
/// marks are not word characters.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}_\s]").expect("valid non-word pattern"));

pub fn make_stemmer() -> Stemmer {
    Stemmer::create(Algorithm::English)
}

pub fn is_stop_word(w: &str) -> bool {
    STOP_WORDS.contains(&w)
}

/// Lower-case `text`, blank out everything that is neither a word character
/// nor whitespace, split on whitespace and keep tokens longer than two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_WORD
        .replace_all(&lowered, " ")
        .split_whitespace()
        .filter(|w| w.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_owned)
        .collect()
}

/// Drop stop words, keeping the relative order of everything else.
pub fn remove_stop_words(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|t| !is_stop_word(t)).collect()
}

/// The full text pipeline applied to both queries and FAQ entries.
///
/// Stemming is opt-in; without it the output is exactly
/// `remove_stop_words(tokenize(text))`.
pub struct Analyzer {
    stemmer: Option<Stemmer>,
}

impl Analyzer {
    pub fn new() -> Self {
        Analyzer { stemmer: None }
    }

    pub fn stemming() -> Self {
        Analyzer {
            stemmer: Some(make_stemmer()),
        }
    }

    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = remove_stop_words(tokenize(text));
        match &self.stemmer {
            Some(stemmer) => tokens
                .iter()
                .map(|t| stemmer.stem(t).into_owned())
                .collect(),
            None => tokens,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

use crate::{Result, SearchError};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref CONTROL_CHAR: Regex = Regex::new(r"[\x00-\x1F]").expect("valid regex");
}

/// Split text on runs of whitespace.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> { text.split_whitespace() }

pub fn is_valid_word(word: &str) -> bool { !CONTROL_CHAR.is_match(word) }

pub fn ensure_valid_word(word: &str) -> Result<()> {
    if is_valid_word(word) {
        Ok(())
    } else {
        Err(SearchError::InvalidWord(word.to_string()))
    }
}

/// Split and validate every token; fails on the first invalid one.
pub fn tokenize(text: &str) -> Result<Vec<&str>> {
    split_into_words(text)
        .map(|w| ensure_valid_word(w).map(|_| w))
        .collect()
}

/// Immutable, case-sensitive set of words excluded from indexing and queries.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Build from whitespace-delimited text, e.g. `"and in on"`.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_words(split_into_words(text))
    }

    /// Build from any collection of words. Empty entries are ignored.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for word in words {
            let word = word.as_ref();
            if word.is_empty() { continue; }
            ensure_valid_word(word)?;
            set.insert(word.to_string());
        }
        Ok(Self { words: set })
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }

    /// Tokenize `text` and drop stop words. Validation covers every token,
    /// stop words included, before anything is returned.
    pub fn split_no_stop<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let words = tokenize(text)?;
        Ok(words.into_iter().filter(|w| !self.contains(w)).collect())
    }
}

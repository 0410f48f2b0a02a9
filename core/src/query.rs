use crate::tokenizer::{ensure_valid_word, split_into_words, StopWords};
use crate::{Result, SearchError};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryWord<'a> {
    pub data: &'a str,
    pub is_minus: bool,
}

/// A parsed query. `plus_words` and `minus_words` never share a term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: HashSet<String>,
    pub minus_words: HashSet<String>,
}

impl Query {
    pub fn is_empty(&self) -> bool { self.plus_words.is_empty() && self.minus_words.is_empty() }
}

pub fn parse_query_word(word: &str) -> Result<QueryWord<'_>> {
    ensure_valid_word(word)?;
    if word == "-" || word.starts_with("--") {
        return Err(SearchError::MalformedQuery(word.to_string()));
    }
    Ok(match word.strip_prefix('-') {
        Some(data) => QueryWord { data, is_minus: true },
        None => QueryWord { data: word, is_minus: false },
    })
}

/// Parse raw query text. Any invalid token aborts the whole parse. When a term
/// appears with both polarities, its last occurrence decides.
pub fn parse_query(text: &str, stop_words: &StopWords) -> Result<Query> {
    let words = split_into_words(text)
        .map(parse_query_word)
        .collect::<Result<Vec<_>>>()?;

    let mut query = Query::default();
    for word in words {
        if stop_words.contains(word.data) {
            continue;
        }
        let (keep, other) = if word.is_minus {
            (&mut query.minus_words, &mut query.plus_words)
        } else {
            (&mut query.plus_words, &mut query.minus_words)
        };
        other.remove(word.data);
        keep.insert(word.data.to_string());
    }
    Ok(query)
}

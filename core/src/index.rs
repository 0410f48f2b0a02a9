use crate::DocId;
use std::collections::HashMap;

/// Term frequencies of one term, keyed by document.
pub type TermFreqs = HashMap<DocId, f64>;

/// Maps every indexed term to the documents containing it and their term frequency.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_document_freqs: HashMap<String, TermFreqs>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Record the effective words of one document. Each occurrence adds
    /// `1 / words.len()` to the word's frequency for `doc_id`.
    pub fn add_document_words<S: AsRef<str>>(&mut self, doc_id: DocId, words: &[S]) {
        if words.is_empty() {
            return;
        }
        let inv_word_count = 1.0 / words.len() as f64;
        for word in words {
            *self
                .word_to_document_freqs
                .entry(word.as_ref().to_string())
                .or_default()
                .entry(doc_id)
                .or_insert(0.0) += inv_word_count;
        }
    }

    pub fn postings(&self, word: &str) -> Option<&TermFreqs> { self.word_to_document_freqs.get(word) }

    pub fn contains(&self, word: &str, doc_id: DocId) -> bool {
        self.postings(word).is_some_and(|freqs| freqs.contains_key(&doc_id))
    }

    pub fn term_frequency(&self, word: &str, doc_id: DocId) -> f64 {
        self.postings(word)
            .and_then(|freqs| freqs.get(&doc_id).copied())
            .unwrap_or(0.0)
    }

    pub fn doc_frequency(&self, word: &str) -> usize { self.postings(word).map_or(0, HashMap::len) }

    pub fn num_terms(&self) -> usize { self.word_to_document_freqs.len() }

    /// `ln(num_docs / df)`. `None` for terms absent from the index.
    pub fn inverse_document_freq(&self, word: &str, num_docs: usize) -> Option<f64> {
        let df = self.doc_frequency(word);
        if df == 0 {
            return None;
        }
        Some((num_docs as f64 / df as f64).ln())
    }
}

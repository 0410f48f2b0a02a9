use crate::document::{compute_average_rating, DocumentData};
use crate::index::InvertedIndex;
use crate::query::parse_query;
use crate::rank::{top_documents, DocumentPredicate, SearchOptions};
use crate::tokenizer::StopWords;
use crate::{DocId, Document, DocumentStatus, Result, SearchError};
use std::collections::HashMap;

/// In-memory TF-IDF search engine over short documents.
///
/// Documents are only ever appended. `add_document` validates everything
/// before touching the index, so a failed call leaves the engine unchanged.
#[derive(Debug, Default)]
pub struct SearchServer {
    stop_words: StopWords,
    options: SearchOptions,
    index: InvertedIndex,
    documents: HashMap<DocId, DocumentData>,
    document_ids: Vec<DocId>,
}

impl SearchServer {
    /// Build from whitespace-delimited stop words.
    pub fn new(stop_words_text: &str) -> Result<Self> {
        Ok(Self::with_options(StopWords::parse(stop_words_text)?, SearchOptions::default()))
    }

    pub fn with_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Self::with_options(StopWords::from_words(stop_words)?, SearchOptions::default()))
    }

    pub fn with_options(stop_words: StopWords, options: SearchOptions) -> Self {
        Self { stop_words, options, ..Self::default() }
    }

    pub fn add_document(
        &mut self,
        document_id: DocId,
        document: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        if document_id < 0 {
            return Err(SearchError::NegativeId(document_id));
        }
        if self.documents.contains_key(&document_id) {
            return Err(SearchError::DuplicateId(document_id));
        }
        let words = self.stop_words.split_no_stop(document)?;

        self.index.add_document_words(document_id, &words);
        let rating = compute_average_rating(ratings);
        self.documents.insert(document_id, DocumentData { rating, status });
        self.document_ids.push(document_id);
        tracing::debug!(document_id, words = words.len(), rating, ?status, "indexed document");
        Ok(())
    }

    /// Top documents with status [`DocumentStatus::Actual`].
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(
        &self,
        raw_query: &str,
        status: DocumentStatus,
    ) -> Result<Vec<Document>> {
        self.find_top_documents_with(raw_query, status)
    }

    pub fn find_top_documents_with<P: DocumentPredicate>(
        &self,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<Document>> {
        let query = parse_query(raw_query, &self.stop_words)?;
        let num_docs = self.document_count();

        let mut relevance: HashMap<DocId, f64> = HashMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            let Some(idf) = self.index.inverse_document_freq(word, num_docs) else { continue };
            for (&doc_id, &tf) in postings {
                let Some(data) = self.documents.get(&doc_id) else { continue };
                if predicate.accept(doc_id, data.status, data.rating) {
                    *relevance.entry(doc_id).or_insert(0.0) += tf * idf;
                }
            }
        }
        for word in &query.minus_words {
            if let Some(postings) = self.index.postings(word) {
                for doc_id in postings.keys() {
                    relevance.remove(doc_id);
                }
            }
        }

        let matched: Vec<Document> = relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                self.documents.get(&id).map(|data| Document::new(id, relevance, data.rating))
            })
            .collect();
        let total_hits = matched.len();
        let top = top_documents(matched, &self.options);
        tracing::debug!(query = raw_query, total_hits, returned = top.len(), "ranked documents");
        Ok(top)
    }

    /// Plus-words of `raw_query` present in the document, sorted, and its status.
    /// The word list is empty when any minus-word occurs in the document.
    pub fn match_document(
        &self,
        raw_query: &str,
        document_id: DocId,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let data = self
            .documents
            .get(&document_id)
            .ok_or(SearchError::UnknownDocument(document_id))?;
        let query = parse_query(raw_query, &self.stop_words)?;

        if query.minus_words.iter().any(|w| self.index.contains(w, document_id)) {
            return Ok((Vec::new(), data.status));
        }
        let mut matched: Vec<String> = query
            .plus_words
            .into_iter()
            .filter(|w| self.index.contains(w, document_id))
            .collect();
        matched.sort_unstable();
        Ok((matched, data.status))
    }

    pub fn document_count(&self) -> usize { self.documents.len() }

    /// Id of the document added at position `ordinal`.
    pub fn document_id(&self, ordinal: usize) -> Result<DocId> {
        self.document_ids
            .get(ordinal)
            .copied()
            .ok_or(SearchError::IndexOutOfRange { ordinal, len: self.document_ids.len() })
    }

    /// Document ids in insertion order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.document_ids.iter().copied()
    }
}

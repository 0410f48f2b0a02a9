use crate::{DocId, Document, DocumentStatus};
use serde::Deserialize;
use std::cmp::Ordering;

pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;
pub const RELEVANCE_EPSILON: f64 = 1e-6;

/// Ranking knobs.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_results: usize,
    /// Relevances closer than this are ranked by rating instead.
    pub relevance_epsilon: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { max_results: MAX_RESULT_DOCUMENT_COUNT, relevance_epsilon: RELEVANCE_EPSILON }
    }
}

/// Decides whether a candidate document may appear in search results.
pub trait DocumentPredicate {
    fn accept(&self, id: DocId, status: DocumentStatus, rating: i32) -> bool;
}

impl<F> DocumentPredicate for F
where
    F: Fn(DocId, DocumentStatus, i32) -> bool,
{
    fn accept(&self, id: DocId, status: DocumentStatus, rating: i32) -> bool { self(id, status, rating) }
}

impl DocumentPredicate for DocumentStatus {
    fn accept(&self, _id: DocId, status: DocumentStatus, _rating: i32) -> bool { *self == status }
}

fn by_relevance(a: &Document, b: &Document) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| b.rating.cmp(&a.rating))
        .then_with(|| a.id.cmp(&b.id))
}

fn by_rating(a: &Document, b: &Document) -> Ordering {
    b.rating.cmp(&a.rating).then_with(|| by_relevance(a, b))
}

/// Order hits by descending relevance; hits whose relevance lies within
/// `epsilon` of the head of their run are ordered by descending rating.
/// Both passes use total orders, so the result is deterministic.
pub fn sort_documents(docs: &mut [Document], epsilon: f64) {
    docs.sort_by(by_relevance);
    let mut start = 0;
    while start < docs.len() {
        let head = docs[start].relevance;
        let end = docs[start + 1..]
            .iter()
            .position(|d| (head - d.relevance).abs() >= epsilon)
            .map_or(docs.len(), |offset| start + 1 + offset);
        docs[start..end].sort_by(by_rating);
        start = end;
    }
}

/// Sort and truncate to `options.max_results`.
pub fn top_documents(mut docs: Vec<Document>, options: &SearchOptions) -> Vec<Document> {
    sort_documents(&mut docs, options.relevance_epsilon);
    docs.truncate(options.max_results);
    docs
}

use serde::{Deserialize, Serialize};
use std::fmt;

pub type DocId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Actual,
    Irrelevant,
    Banned,
    Removed,
}

/// A ranked search hit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl Document {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self { Self { id, relevance, rating } }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ document_id = {}, relevance = {}, rating = {} }}",
            self.id, self.relevance, self.rating
        )
    }
}

/// Per-document metadata kept alongside the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentData {
    pub rating: i32,
    pub status: DocumentStatus,
}

/// Integer mean of `ratings`, truncated toward zero; 0 when empty.
pub fn compute_average_rating(ratings: &[i32]) -> i32 {
    if ratings.is_empty() {
        return 0;
    }
    let sum: i64 = ratings.iter().map(|&r| r as i64).sum();
    (sum / ratings.len() as i64) as i32
}

use crate::DocId;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors surfaced by indexing, query parsing and lookups.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("document id {0} is negative")]
    NegativeId(DocId),
    #[error("document id {0} is already indexed")]
    DuplicateId(DocId),
    #[error("word {0:?} contains a control character")]
    InvalidWord(String),
    #[error("malformed query word {0:?}")]
    MalformedQuery(String),
    #[error("ordinal {ordinal} is out of range for {len} documents")]
    IndexOutOfRange { ordinal: usize, len: usize },
    #[error("document {0} is not indexed")]
    UnknownDocument(DocId),
    #[error("page size must be positive")]
    ZeroPageSize,
}

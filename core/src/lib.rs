//! In-memory full-text search with stop words, plus/minus queries and TF-IDF ranking.

pub mod document;
pub mod error;
pub mod index;
pub mod paginate;
pub mod query;
pub mod rank;
pub mod server;
pub mod tokenizer;

pub use document::{DocId, Document, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use paginate::{paginate, Paginator};
pub use query::{parse_query, Query};
pub use rank::{DocumentPredicate, SearchOptions};
pub use server::SearchServer;
pub use tokenizer::StopWords;

//! In-memory keyword index over a small document corpus with ranked
//! two-keyword OR queries.

pub mod document;
pub mod engine;
pub mod error;
pub mod index;
pub mod noise;
pub mod search;
pub mod tokenizer;

pub use document::LocalDocumentMap;
pub use engine::{EngineConfig, SearchEngine};
pub use error::{Result, SearchError};
pub use index::{insert_last_occurrence, KeywordIndex, Occurrence};
pub use noise::NoiseWords;
pub use search::{top5_search, MAX_RESULTS};

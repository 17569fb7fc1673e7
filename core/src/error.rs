use std::path::PathBuf;

/// Result type used throughout the crate.
pub type Result<T, E = SearchError> = std::result::Result<T, E>;

/// Failures that abort an indexing run.
///
/// Malformed tokens and unknown query keywords are not errors; they are
/// filtered out or treated as empty occurrence lists.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// A document list, noise-word file or document could not be opened.
    #[error("resource not found: {path}")]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No path was supplied where a document was expected.
    #[error("resource not found: no path given")]
    MissingPath,
}

impl SearchError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ResourceNotFound { path: path.into(), source }
    }
}

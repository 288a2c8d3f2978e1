use thiserror::Error;

/// Sentinel for a document whose text stream cannot be extracted. This is
/// the recoverable per-document failure path: the corpus builder skips the
/// document with a warning and keeps indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot read document stream")]
pub struct UnreadableDocument;

/// Failures that escalate to the caller. Per-document extraction failures
/// never appear here; they are absorbed during the build phase.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Malformed size-ceiling configuration. Fatal before any indexing work
    /// begins.
    #[error("invalid size spec {spec:?}: expected <number><B|K|M|G>")]
    InvalidSizeSpec { spec: String },
    /// Requested more ranked results than there are scored entries.
    #[error("requested {requested} results but only {available} are available")]
    ResultCountExceedsCorpus { requested: usize, available: usize },
}

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod tokenizer;
pub mod weighting;

pub use config::parse_size_spec;
pub use corpus::{build_index, CorpusBuild};
pub use document::{DocumentSource, PdfSource};
pub use error::{SearchError, UnreadableDocument};
pub use index::{CorpusIndex, DocumentFrequencies, RankedHit, TermFrequencies, WeightedIndex};

use std::path::Path;

/// Builds the corpus index under `root`, weights it, and ranks it against
/// `query` in one pass. Both the CLI and the HTTP front-end call through
/// here.
///
/// `size_spec` is parsed before any indexing work, so a malformed ceiling
/// aborts the run up front. `max_results` is clamped to the number of
/// indexed documents.
pub fn build_and_query<S: DocumentSource>(
    source: &S,
    root: &Path,
    size_spec: &str,
    workers: usize,
    query: &[String],
    max_results: usize,
) -> Result<Vec<RankedHit>, SearchError> {
    let max_bytes = config::parse_size_spec(size_spec)?;
    let build = corpus::build_index(source, root, max_bytes, workers);
    let global = weighting::document_frequencies(&build.index);
    let weighted = weighting::reassign_weights(build.index, &global);
    query::rank(&weighted, query, max_results)
}

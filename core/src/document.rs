use crate::error::UnreadableDocument;
use crate::index::TermFrequencies;
use crate::tokenizer;
use std::collections::HashMap;
use std::path::Path;

/// The text-extraction collaborator. Yields the text of each page of the
/// document at `path`, in page order. `Err` means the document stream
/// itself is unreadable; callers skip the document, they do not abort.
pub trait DocumentSource: Sync {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, UnreadableDocument>;
}

/// Production extractor backed by lopdf.
///
/// A document that fails to load is unreadable. A single page that fails
/// to extract inside a loadable document is dropped with a debug log and
/// the remaining pages still index.
pub struct PdfSource;

impl DocumentSource for PdfSource {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>, UnreadableDocument> {
        let doc = lopdf::Document::load(path).map_err(|err| {
            tracing::debug!(path = %path.display(), %err, "failed to load pdf");
            UnreadableDocument
        })?;
        let mut pages = Vec::new();
        for (number, _) in doc.get_pages() {
            match doc.extract_text(&[number]) {
                Ok(text) => pages.push(text),
                Err(err) => {
                    tracing::debug!(path = %path.display(), page = number, %err, "failed to extract page");
                }
            }
        }
        Ok(pages)
    }
}

/// Tokenizes every page of one document and folds the counts into a
/// normalized term-frequency table. Pages are tokenized independently, so
/// a token never spans a page boundary. A document with zero tokens yields
/// an empty table.
pub fn process_document<S: DocumentSource + ?Sized>(
    source: &S,
    path: &Path,
) -> Result<TermFrequencies, UnreadableDocument> {
    let pages = source.extract_pages(path)?;
    let mut counts: HashMap<String, u64> = HashMap::new();
    let mut total: u64 = 0;
    for page in &pages {
        for token in tokenizer::tokens(page) {
            *counts.entry(token).or_insert(0) += 1;
            total += 1;
        }
    }
    if total == 0 {
        return Ok(TermFrequencies::new());
    }
    Ok(counts
        .into_iter()
        .map(|(term, count)| (term, count as f64 / total as f64))
        .collect())
}

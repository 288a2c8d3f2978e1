use crate::index::{CorpusIndex, DocumentFrequencies, WeightedIndex};

/// Counts, for every term in the corpus, the number of distinct documents
/// containing it. A term occurring many times in one document still
/// contributes exactly one to its document frequency.
pub fn document_frequencies(index: &CorpusIndex) -> DocumentFrequencies {
    tracing::debug!(documents = index.len(), "building global document-frequency table");
    let mut global = DocumentFrequencies::new();
    for table in index.docs.values() {
        for term in table.keys() {
            *global.entry(term.clone()).or_insert(0) += 1;
        }
    }
    global
}

/// Rewrites every normalized frequency into a TF-IDF weight,
/// `tf * ln(N / df)` with `N` the corpus document count.
///
/// Consumes the frequency index and returns a distinct weighted index, so
/// applying the transform twice does not type-check. A term missing from
/// `global` (cannot happen when it was derived from the same corpus) keeps
/// its frequency untouched.
pub fn reassign_weights(index: CorpusIndex, global: &DocumentFrequencies) -> WeightedIndex {
    tracing::debug!(documents = index.len(), "reassigning tf-idf weights");
    let total = index.len() as f64;
    let docs = index
        .docs
        .into_iter()
        .map(|(name, table)| {
            let weighted = table
                .into_iter()
                .map(|(term, tf)| {
                    let weight = match global.get(&term) {
                        Some(&df) => tf * (total / f64::from(df)).ln(),
                        None => tf,
                    };
                    (term, weight)
                })
                .collect();
            (name, weighted)
        })
        .collect();
    WeightedIndex { docs }
}

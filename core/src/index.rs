use serde::Serialize;
use std::collections::HashMap;

/// Normalized term-frequency table for one document: each value is the
/// term's share of the document's total tokens, so values sum to 1.0 for
/// any non-empty document. An empty document has an empty table.
pub type TermFrequencies = HashMap<String, f64>;

/// Term -> number of distinct documents containing it at least once.
pub type DocumentFrequencies = HashMap<String, u32>;

/// Per-document term-frequency tables, keyed by path relative to the
/// corpus root. Built once by `corpus::build_index`, then consumed by
/// value by `weighting::reassign_weights`.
#[derive(Debug, Default)]
pub struct CorpusIndex {
    pub docs: HashMap<String, TermFrequencies>,
}

impl CorpusIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Per-document TF-IDF weights. A distinct type from [`CorpusIndex`] so a
/// frequency table can never be weighted twice: `reassign_weights` consumes
/// the frequencies and produces this.
#[derive(Debug, Default)]
pub struct WeightedIndex {
    pub docs: HashMap<String, HashMap<String, f64>>,
}

impl WeightedIndex {
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// One entry of a ranked result list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedHit {
    pub name: String,
    pub score: f64,
}

use crate::error::SearchError;
use crate::index::{RankedHit, WeightedIndex};
use crate::tokenizer;
use std::collections::HashMap;

/// Returns the `n` highest-scored entries, sorted descending by score.
/// Ties break ascending by name, so rankings are reproducible across runs.
/// Errors when `n` exceeds the number of entries.
pub fn top_n(scores: &HashMap<String, f64>, n: usize) -> Result<Vec<RankedHit>, SearchError> {
    if n > scores.len() {
        return Err(SearchError::ResultCountExceedsCorpus {
            requested: n,
            available: scores.len(),
        });
    }
    let mut ranked: Vec<RankedHit> = scores
        .iter()
        .map(|(name, &score)| RankedHit {
            name: name.clone(),
            score,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.name.cmp(&b.name)));
    ranked.truncate(n);
    Ok(ranked)
}

/// Scores every document as the sum of its weights for the query terms
/// (absent terms contribute 0) and returns at most `max_results` hits.
///
/// Query terms pass through the same tokenizer as document text, so casing
/// and punctuation cannot make a term miss its indexed form. A query
/// entirely outside the vocabulary ranks every document at 0 rather than
/// failing. `max_results` is clamped to the corpus size.
pub fn rank(
    index: &WeightedIndex,
    query: &[String],
    max_results: usize,
) -> Result<Vec<RankedHit>, SearchError> {
    let terms: Vec<String> = query
        .iter()
        .flat_map(|part| tokenizer::tokens(part))
        .collect();
    let mut scores: HashMap<String, f64> = HashMap::with_capacity(index.len());
    for (name, weights) in &index.docs {
        let score: f64 = terms.iter().filter_map(|term| weights.get(term)).sum();
        scores.insert(name.clone(), score);
    }
    top_n(&scores, max_results.min(scores.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn weighted(docs: &[(&str, &[(&str, f64)])]) -> WeightedIndex {
        let mut index = WeightedIndex::default();
        for (name, terms) in docs {
            index.docs.insert(
                name.to_string(),
                terms.iter().map(|(t, w)| (t.to_string(), *w)).collect(),
            );
        }
        index
    }

    #[test]
    fn top_n_returns_k_entries_descending() {
        let map = scores(&[("a", 0.1), ("b", 0.7), ("c", 0.4), ("d", 0.2)]);
        let ranked = top_n(&map, 3).unwrap();
        let names: Vec<&str> = ranked.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "d"]);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn top_n_breaks_ties_by_name() {
        let map = scores(&[("zeta", 0.5), ("alpha", 0.5), ("mid", 0.5)]);
        let ranked = top_n(&map, 3).unwrap();
        let names: Vec<&str> = ranked.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn top_n_rejects_out_of_range_count() {
        let map = scores(&[("a", 1.0)]);
        let err = top_n(&map, 2).unwrap_err();
        assert!(matches!(
            err,
            SearchError::ResultCountExceedsCorpus {
                requested: 2,
                available: 1,
            }
        ));
    }

    #[test]
    fn rank_sums_query_term_weights() {
        let index = weighted(&[
            ("a.pdf", &[("SYSTEM", 0.3), ("DESIGN", 0.1)]),
            ("b.pdf", &[("SYSTEM", 0.2)]),
            ("c.pdf", &[("OTHER", 0.9)]),
        ]);
        let hits = rank(&index, &["system".into(), "design".into()], 3).unwrap();
        assert_eq!(hits[0].name, "a.pdf");
        assert!((hits[0].score - 0.4).abs() < 1e-12);
        assert_eq!(hits[1].name, "b.pdf");
        assert_eq!(hits[2].score, 0.0);
    }

    #[test]
    fn rank_normalizes_query_like_documents() {
        let index = weighted(&[("a.pdf", &[("SYSTEM", 0.3)])]);
        let hits = rank(&index, &["SyStEm!".into()], 1).unwrap();
        assert!((hits[0].score - 0.3).abs() < 1e-12);
    }

    #[test]
    fn unknown_vocabulary_scores_every_document_zero() {
        let index = weighted(&[("a.pdf", &[("SYSTEM", 0.3)]), ("b.pdf", &[("OTHER", 0.2)])]);
        let hits = rank(&index, &["nonexistent".into()], 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|h| h.score == 0.0));
    }

    #[test]
    fn rank_clamps_max_results_to_corpus_size() {
        let index = weighted(&[("a.pdf", &[("SYSTEM", 0.3)])]);
        let hits = rank(&index, &["system".into()], 50).unwrap();
        assert_eq!(hits.len(), 1);

        let empty = WeightedIndex::default();
        assert!(rank(&empty, &["system".into()], 10).unwrap().is_empty());
    }
}

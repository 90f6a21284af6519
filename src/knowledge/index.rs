//! TF-IDF vector index over fact sentences
//!
//! Weighting:
//! - term frequency: raw count of the term in the sentence
//! - inverse document frequency: `ln((1 + n) / (1 + df)) + 1` (smoothed)
//! - every sentence vector is L2-normalized, so a dot product is a cosine
//!
//! The vocabulary is frozen at build time and capped at `max_features`
//! terms, keeping the most frequent ones across the whole corpus.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::collections::HashMap;

use tracing::debug;
use tracing::info;

use crate::config::IndexConfig;
use crate::errors::FactRagError;
use crate::errors::Result;
use crate::knowledge::corpus::FactCorpus;
use crate::knowledge::text_preprocessing::TextNormalizer;

/// Sparse vector: `(term id, weight)` sorted by term id
type SparseVector = Vec<(usize, f32)>;

/// Ranked index hit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSentence {
    pub index: usize,
    pub score: f32,
}

/// Vector space model over a fixed set of sentences
#[derive(Debug, Clone, Default)]
pub struct VectorIndex {
    normalizer: TextNormalizer,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
    min_relevance: f32,
}

impl VectorIndex {
    /// Build the model. An empty sentence list produces an index that
    /// refuses to search.
    pub fn build<S: AsRef<str>>(sentences: &[S], config: &IndexConfig) -> Self {
        let normalizer = TextNormalizer::new(config.remove_stopwords);
        let documents: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| normalizer.tokenize(s.as_ref()))
            .collect();

        let vocabulary = select_vocabulary(&documents, config.max_features);

        let mut document_frequency = vec![0usize; vocabulary.len()];
        for tokens in &documents {
            let mut seen: Vec<usize> = tokens
                .iter()
                .filter_map(|t| vocabulary.get(t).copied())
                .collect();
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                document_frequency[term] += 1;
            }
        }

        let n = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let vectors = documents
            .iter()
            .map(|tokens| weigh(tokens, &vocabulary, &idf))
            .collect();

        info!(
            "Built TF-IDF index: {} sentences, {} terms",
            documents.len(),
            vocabulary.len()
        );

        Self {
            normalizer,
            vocabulary,
            idf,
            vectors,
            min_relevance: config.min_relevance,
        }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Cosine similarity of the query against every sentence, best first.
    /// Equal scores keep ascending sentence order.
    pub fn score(&self, query: &str) -> Result<Vec<ScoredSentence>> {
        if self.is_empty() {
            return Err(FactRagError::EmptyCorpus);
        }

        let tokens = self.normalizer.tokenize(query);
        let query_vector = weigh(&tokens, &self.vocabulary, &self.idf);

        let mut scored: Vec<ScoredSentence> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| ScoredSentence {
                index,
                score: dot(&query_vector, vector).clamp(0.0, 1.0),
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then(a.index.cmp(&b.index))
        });

        Ok(scored)
    }

    /// Top `top_k` sentences scoring strictly above the relevance floor
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<ScoredSentence>> {
        let hits: Vec<ScoredSentence> = self
            .score(query)?
            .into_iter()
            .take_while(|hit| hit.score > self.min_relevance)
            .take(top_k)
            .collect();

        debug!("Search \"{}\" -> {} hit(s)", query, hits.len());
        Ok(hits)
    }
}

/// Build the index for a loaded corpus
pub fn build_index(corpus: &FactCorpus, config: &IndexConfig) -> VectorIndex {
    VectorIndex::build(corpus.all_sentences(), config)
}

/// Most frequent `max_features` terms, ties broken alphabetically; ids are
/// assigned in alphabetical order.
fn select_vocabulary(documents: &[Vec<String>], max_features: usize) -> HashMap<String, usize> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for tokens in documents {
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    // BTreeMap order is alphabetical and the sort is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(max_features);

    let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
    kept.sort_unstable();

    kept.into_iter()
        .enumerate()
        .map(|(id, term)| (term.to_string(), id))
        .collect()
}

/// TF-IDF weights for a token list, L2-normalized. Unknown tokens are ignored.
fn weigh(tokens: &[String], vocabulary: &HashMap<String, usize>, idf: &[f32]) -> SparseVector {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for token in tokens {
        if let Some(&term) = vocabulary.get(token) {
            *counts.entry(term).or_insert(0) += 1;
        }
    }

    let mut vector: SparseVector = counts
        .into_iter()
        .map(|(term, count)| (term, count as f32 * idf[term]))
        .collect();

    let norm = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, weight) in &mut vector {
            *weight /= norm;
        }
    }

    vector
}

/// Dot product of two id-sorted sparse vectors
fn dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> IndexConfig {
        IndexConfig {
            max_features: 500,
            min_relevance: 0.1,
            remove_stopwords: true,
        }
    }

    fn sentences() -> Vec<&'static str> {
        vec![
            "Our products are 100% organic and cruelty-free.",
            "We use biodegradable packaging.",
            "Our organic skin care line is gentle.",
            "Shipping takes three to five days.",
        ]
    }

    #[test]
    fn test_dot_sparse() {
        let a = vec![(0, 0.6), (2, 0.8)];
        let b = vec![(1, 1.0), (2, 0.5)];
        assert!((dot(&a, &b) - 0.4).abs() < 1e-6);
        assert_eq!(dot(&a, &[]), 0.0);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let index = VectorIndex::build(&sentences(), &config());
        for vector in &index.vectors {
            let norm: f32 = vector.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_identical_sentence_scores_one() {
        let index = VectorIndex::build(&sentences(), &config());
        let scored = index.score("We use biodegradable packaging.").unwrap();
        assert_eq!(scored[0].index, 1);
        assert!((scored[0].score - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let index = VectorIndex::build(&sentences(), &config());
        let scored = index.score("xyzzy plugh").unwrap();
        assert!(scored.iter().all(|s| s.score == 0.0));
        assert!(index.search("xyzzy plugh", 5).unwrap().is_empty());
    }

    #[test]
    fn test_rank_order_descending_with_index_tiebreak() {
        let index = VectorIndex::build(&sentences(), &config());
        let scored = index.score("organic").unwrap();

        for pair in scored.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                assert!(pair[0].index < pair[1].index);
            }
        }
        // Both organic sentences outrank the rest
        let top: Vec<usize> = scored.iter().take(2).map(|s| s.index).collect();
        assert!(top.contains(&0) && top.contains(&2));
    }

    #[test]
    fn test_equal_scores_keep_corpus_order() {
        let duplicated = vec!["fresh organic soap", "fresh organic soap", "plain water"];
        let index = VectorIndex::build(&duplicated, &config());
        let hits = index.search("organic soap", 5).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[1].index, 1);
        assert_eq!(hits[0].score, hits[1].score);
    }

    #[test]
    fn test_search_respects_top_k() {
        let index = VectorIndex::build(&sentences(), &config());
        let hits = index.search("organic", 1).unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_out_of_vocabulary_terms_are_ignored() {
        let index = VectorIndex::build(&sentences(), &config());
        let plain = index.score("biodegradable").unwrap();
        let noisy = index.score("biodegradable zzzunknown").unwrap();
        assert_eq!(plain[0].index, noisy[0].index);
        assert!((plain[0].score - noisy[0].score).abs() < 1e-6);
    }

    #[test]
    fn test_vocabulary_cap_keeps_most_frequent_terms() {
        let docs = vec!["organic organic soap", "organic lotion", "soap bar"];
        let capped = IndexConfig {
            max_features: 2,
            ..config()
        };
        let index = VectorIndex::build(&docs, &capped);

        assert_eq!(index.vocabulary_size(), 2);
        assert!(index.contains_term("organic"));
        assert!(index.contains_term("soap"));
        assert!(!index.contains_term("lotion"));
    }

    #[test]
    fn test_rare_terms_weigh_more() {
        let docs = vec!["organic soap", "organic lotion", "organic shampoo"];
        let index = VectorIndex::build(&docs, &config());
        let organic = index.vocabulary["organic"];
        let soap = index.vocabulary["soap"];
        assert!(index.idf[soap] > index.idf[organic]);
    }

    #[test]
    fn test_empty_index_refuses_search() {
        let empty: Vec<String> = Vec::new();
        let index = VectorIndex::build(&empty, &config());
        assert!(matches!(index.search("organic", 5), Err(FactRagError::EmptyCorpus)));
        assert!(matches!(
            VectorIndex::default().score("organic"),
            Err(FactRagError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_build_index_from_corpus() {
        let corpus = FactCorpus::parse("[Products]\nOrganic soap.\n[Care]\nGentle lotion.\n");
        let index = build_index(&corpus, &config());
        assert_eq!(index.len(), corpus.sentence_count());
    }
}

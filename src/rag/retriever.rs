//! Retrieval of ranked facts

use tracing::debug;

use crate::errors::Result;
use crate::knowledge::FactCorpus;
use crate::knowledge::VectorIndex;
use crate::rag::SearchResult;

/// Joins index hits back to their sentences and sections
pub struct Retriever<'a> {
    index: &'a VectorIndex,
    corpus: &'a FactCorpus,
}

impl<'a> Retriever<'a> {
    /// Create a new retriever
    pub fn new(index: &'a VectorIndex, corpus: &'a FactCorpus) -> Self {
        Self { index, corpus }
    }

    /// Top `limit` facts scoring above the index's relevance floor
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        debug!("Performing TF-IDF search: {}", query);

        let hits = self.index.search(query, limit)?;
        let results = hits
            .into_iter()
            .filter_map(|hit| {
                let text = self.corpus.sentence(hit.index)?;
                let section = self.corpus.section_of(hit.index)?;
                Some(SearchResult {
                    sentence_index: hit.index,
                    section: section.to_string(),
                    text: text.to_string(),
                    score: hit.score,
                })
            })
            .collect();

        Ok(results)
    }
}

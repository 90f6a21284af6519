//! Answer synthesis from ranked facts

use serde::Serialize;
use tracing::debug;

use crate::config::AnswerConfig;
use crate::errors::Result;
use crate::knowledge::FactCorpus;
use crate::knowledge::VectorIndex;
use crate::rag::QueryIntent;
use crate::rag::Retriever;
use crate::rag::SearchResult;

/// Synthesized answer. `text` is `None` when nothing relevant was found,
/// which is a normal outcome and not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Answer {
    pub text: Option<String>,
    /// Score of the single best fact, whatever was combined into `text`
    pub confidence: f32,
    pub intent: Option<QueryIntent>,
    pub sources: Vec<SearchResult>,
}

impl Answer {
    pub fn no_match() -> Self {
        Self {
            text: None,
            confidence: 0.0,
            intent: None,
            sources: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.text.is_some()
    }
}

/// Selects and combines facts according to the question type
#[derive(Debug, Clone, Default)]
pub struct AnswerSynthesizer {
    config: AnswerConfig,
}

impl AnswerSynthesizer {
    pub fn new(config: AnswerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnswerConfig {
        &self.config
    }

    /// Build an answer from results ranked best first
    pub fn synthesize(&self, query: &str, results: &[SearchResult]) -> Answer {
        let Some(top) = results.first() else {
            return Answer::no_match();
        };
        if top.score <= self.config.synthesis_threshold {
            debug!(
                "Top score {:.3} not above synthesis threshold {:.3}",
                top.score, self.config.synthesis_threshold
            );
            return Answer::no_match();
        }

        let intent = QueryIntent::classify(query);
        let text = match intent {
            QueryIntent::YesNo => {
                if self.is_positive(query) {
                    format!("Yes, {}", top.text)
                } else {
                    top.text.clone()
                }
            }
            QueryIntent::What | QueryIntent::Tell | QueryIntent::General => {
                if results.len() >= 2 && top.score > self.config.combine_min_top_score {
                    self.combine(results).unwrap_or_else(|| top.text.clone())
                } else {
                    top.text.clone()
                }
            }
            QueryIntent::Why | QueryIntent::How => match self.combine(results) {
                Some(text) => text,
                None => {
                    debug!(
                        "No fact above combine threshold {:.3} for {} question",
                        self.config.combine_threshold, intent
                    );
                    return Answer::no_match();
                }
            },
            QueryIntent::Who | QueryIntent::Where => top.text.clone(),
        };

        debug!("Synthesized {} answer with confidence {:.3}", intent, top.score);

        Answer {
            text: Some(text),
            confidence: top.score,
            intent: Some(intent),
            sources: results.to_vec(),
        }
    }

    fn is_positive(&self, query: &str) -> bool {
        let lower = query.to_lowercase();
        self.config
            .positive_terms
            .iter()
            .any(|term| lower.contains(&term.to_lowercase()))
    }

    /// Space-join the leading facts that clear the combine threshold.
    /// `None` when none does.
    fn combine(&self, results: &[SearchResult]) -> Option<String> {
        let combined: Vec<&str> = results
            .iter()
            .take(self.config.max_combined)
            .filter(|r| r.score > self.config.combine_threshold)
            .map(|r| r.text.as_str())
            .collect();

        if combined.is_empty() {
            None
        } else {
            Some(combined.join(" "))
        }
    }
}

/// Answer a question against a built index.
///
/// Queries that normalize to nothing return a no-match without touching the index.
pub fn generate_answer(
    index: &VectorIndex,
    corpus: &FactCorpus,
    query: &str,
    config: &AnswerConfig,
) -> Result<Answer> {
    if index.normalizer().normalize(query).is_empty() {
        return Ok(Answer::no_match());
    }

    let results = Retriever::new(index, corpus).search(query, config.top_k)?;
    Ok(AnswerSynthesizer::new(config.clone()).synthesize(query, &results))
}

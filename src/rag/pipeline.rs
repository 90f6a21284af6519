//! Complete RAG pipeline: Normalize -> Retrieve -> Synthesize

use serde::Serialize;
use tracing::debug;
use tracing::info;

use crate::config::AppConfig;
use crate::config::ResponseConfig;
use crate::errors::FactRagError;
use crate::errors::Result;
use crate::knowledge::build_index;
use crate::knowledge::load_corpus;
use crate::knowledge::text_preprocessing::normalize_whitespace;
use crate::knowledge::FactCorpus;
use crate::knowledge::VectorIndex;
use crate::rag::Answer;
use crate::rag::AnswerSynthesizer;
use crate::rag::ContextAssembler;
use crate::rag::Retriever;
use crate::rag::SearchResult;
use crate::suggestions::SuggestionEngine;

/// Reply shown to a user, with the fallback policy already applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatReply {
    pub response: String,
    pub suggestions: Vec<String>,
    pub confidence: f32,
    /// True when `response` is drawn from the knowledge base
    pub answered: bool,
}

/// Knowledge base plus everything needed to answer from it.
///
/// Built once and shared read-only; every method takes `&self`.
pub struct RagService {
    corpus: FactCorpus,
    index: VectorIndex,
    synthesizer: AnswerSynthesizer,
    suggestions: SuggestionEngine,
    response: ResponseConfig,
}

impl RagService {
    /// Load the configured corpus and build the index
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let corpus = load_corpus(config.corpus_path())?;
        Ok(Self::new(corpus, config))
    }

    /// Build the service around an already loaded corpus
    pub fn new(corpus: FactCorpus, config: &AppConfig) -> Self {
        let index = build_index(&corpus, &config.index);

        info!(
            "RAG service ready: {} facts, {} sections, {} terms",
            corpus.sentence_count(),
            corpus.section_count(),
            index.vocabulary_size()
        );

        Self {
            corpus,
            index,
            synthesizer: AnswerSynthesizer::new(config.answer.clone()),
            suggestions: SuggestionEngine::new(config.suggestions.clone()),
            response: config.response.clone(),
        }
    }

    pub fn corpus(&self) -> &FactCorpus {
        &self.corpus
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }

    pub fn suggestions(&self) -> &SuggestionEngine {
        &self.suggestions
    }

    pub fn sentence_count(&self) -> usize {
        self.corpus.sentence_count()
    }

    pub fn section_count(&self) -> usize {
        self.corpus.section_count()
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.corpus.section_names()
    }

    /// All facts of a section
    pub fn section(&self, name: &str) -> Result<&[String]> {
        self.corpus
            .section(name)
            .ok_or_else(|| FactRagError::SectionNotFound(name.to_string()))
    }

    /// Ranked facts for a query
    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        Retriever::new(&self.index, &self.corpus).search(query, top_k)
    }

    /// Answer a question; a miss is `Answer { text: None, confidence: 0.0 }`
    pub fn generate_answer(&self, query: &str) -> Result<Answer> {
        if self.index.normalizer().normalize(query).is_empty() {
            debug!("Query normalizes to nothing, skipping search");
            return Ok(Answer::no_match());
        }

        let results = self.search(query, self.synthesizer.config().top_k)?;
        Ok(self.synthesizer.synthesize(query, &results))
    }

    /// Relevant facts joined into one passage, grouped by section
    pub fn relevant_context(&self, query: &str, max_sentences: usize) -> Result<Option<String>> {
        if self.index.normalizer().normalize(query).is_empty() {
            return Ok(None);
        }

        let results = self.search(query, max_sentences)?;
        Ok(ContextAssembler::new(max_sentences).assemble(&results))
    }

    /// User-facing reply with fallback messages and follow-up suggestions
    pub fn respond(&self, message: &str) -> Result<ChatReply> {
        let message = normalize_whitespace(message);
        let message = message.as_str();

        if message.chars().count() > self.response.max_message_chars {
            return Err(FactRagError::InvalidInput(format!(
                "Message is too long. Please keep it under {} characters",
                self.response.max_message_chars
            )));
        }

        if message.is_empty() {
            return Ok(ChatReply {
                response: self.response.empty_message.clone(),
                suggestions: self.suggestions.starters(),
                confidence: 0.0,
                answered: false,
            });
        }

        if self.index.normalizer().normalize(message).is_empty() {
            return Ok(ChatReply {
                response: self.response.not_understood_message.clone(),
                suggestions: self.suggestions.follow_ups(message),
                confidence: 0.0,
                answered: false,
            });
        }

        let answer = self.generate_answer(message)?;
        match answer.text {
            Some(text) if answer.confidence > self.response.min_confidence => Ok(ChatReply {
                response: text,
                suggestions: self.suggestions.follow_ups(message),
                confidence: answer.confidence,
                answered: true,
            }),
            _ => Ok(ChatReply {
                response: self.response.fallback_message.clone(),
                suggestions: self.suggestions.starters(),
                confidence: answer.confidence,
                answered: false,
            }),
        }
    }
}

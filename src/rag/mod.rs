//! RAG (Retrieval-Augmented Generation) module
//!
//! Turns the knowledge base into answers:
//! - Retrieval of ranked facts from the TF-IDF index
//! - Question-type classification
//! - Answer synthesis by combining top-ranked facts
//! - Context assembly grouped by section
//!
//! # Examples
//!
//! ```rust,no_run
//! use factrag::config::AppConfig;
//! use factrag::rag::RagService;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let service = RagService::from_config(&config)?;
//!
//!     let answer = service.generate_answer("Are your products organic?")?;
//!     println!("Answer: {:?} ({:.2})", answer.text, answer.confidence);
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod intent;
pub mod pipeline;
pub mod retriever;
pub mod synthesizer;

pub use context::ContextAssembler;
pub use intent::QueryIntent;
pub use pipeline::ChatReply;
pub use pipeline::RagService;
pub use retriever::Retriever;
pub use synthesizer::generate_answer;
pub use synthesizer::Answer;
pub use synthesizer::AnswerSynthesizer;

use serde::Serialize;

/// Search result with relevance score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub sentence_index: usize,
    pub section: String,
    pub text: String,
    pub score: f32,
}

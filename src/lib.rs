//! # FactRAG
//!
//! Question answering over a small, sectioned fact corpus.
//!
//! A corpus file is parsed into sections of fact sentences, every sentence is
//! embedded in a TF-IDF vector space, and questions are answered by ranking
//! facts by cosine similarity and combining the best ones according to the
//! question type (yes/no, what, why, how, who, where).
//!
//! ```text
//! load_corpus ─► build_index ─► search ─► synthesize ─► Answer { text, confidence }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod knowledge;
pub mod logging;
pub mod rag;
pub mod suggestions;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
pub mod tests;

pub use config::AppConfig;
pub use errors::*;
pub use knowledge::build_index;
pub use knowledge::load_corpus;
pub use knowledge::FactCorpus;
pub use knowledge::VectorIndex;
pub use rag::generate_answer;
pub use rag::Answer;
pub use rag::RagService;

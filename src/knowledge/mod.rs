//! Knowledge base: corpus loading, text normalization and the TF-IDF index

pub mod corpus;
pub mod index;
pub mod text_preprocessing;

pub use corpus::load_corpus;
pub use corpus::FactCorpus;
pub use corpus::Section;
pub use index::build_index;
pub use index::ScoredSentence;
pub use index::VectorIndex;
pub use text_preprocessing::normalize;
pub use text_preprocessing::TextNormalizer;

pub mod api_tests;
pub mod unit_tests;

use crate::config::AppConfig;
use crate::FactCorpus;
use crate::RagService;

/// Sample knowledge base shared by the crate-level tests
pub const SAMPLE_CORPUS: &str = include_str!("../../tests/fixtures/knowledge_base.txt");

/// Test helper to parse the sample corpus
pub fn sample_corpus() -> FactCorpus {
    FactCorpus::parse(SAMPLE_CORPUS)
}

/// Test helper to build a service over the sample corpus with default settings
pub fn sample_service() -> RagService {
    RagService::new(sample_corpus(), &AppConfig::default())
}

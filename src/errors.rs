use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactRagError {
    #[error("Failed to load knowledge base {}: {reason}", path.display())]
    CorpusLoad { path: PathBuf, reason: String },

    #[error("Knowledge base is empty: build the index from a non-empty corpus before searching")]
    EmptyCorpus,

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParsing(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Custom(String),
}

impl FactRagError {
    pub(crate) fn corpus_load(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::CorpusLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FactRagError>;

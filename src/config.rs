use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Path to the sectioned fact file
    #[serde(default = "default_corpus_path")]
    pub path: PathBuf,
}

pub(crate) fn default_corpus_path() -> PathBuf {
    PathBuf::from("data/knowledge_base.txt")
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: default_corpus_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Vocabulary cap, most frequent terms first
    #[serde(default = "default_max_features")]
    pub max_features: usize,
    /// A hit must score strictly above this to be returned by search
    #[serde(default = "default_min_relevance")]
    pub min_relevance: f32,
    #[serde(default = "default_remove_stopwords")]
    pub remove_stopwords: bool,
}

pub(crate) fn default_max_features() -> usize {
    500
}

pub(crate) fn default_min_relevance() -> f32 {
    0.1
}

pub(crate) fn default_remove_stopwords() -> bool {
    true
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_features: default_max_features(),
            min_relevance: default_min_relevance(),
            remove_stopwords: default_remove_stopwords(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerConfig {
    /// Number of candidates pulled from the index per question
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Top score must be strictly above this to produce an answer
    #[serde(default = "default_synthesis_threshold")]
    pub synthesis_threshold: f32,
    /// Per-fact score needed to be merged into a combined answer
    #[serde(default = "default_combine_threshold")]
    pub combine_threshold: f32,
    /// Top score needed before what/tell/general answers combine facts
    #[serde(default = "default_combine_min_top_score")]
    pub combine_min_top_score: f32,
    #[serde(default = "default_max_combined")]
    pub max_combined: usize,
    /// Terms in a yes/no question that earn an affirming "Yes, " lead-in
    #[serde(default = "default_positive_terms")]
    pub positive_terms: Vec<String>,
}

pub(crate) fn default_top_k() -> usize {
    5
}

pub(crate) fn default_synthesis_threshold() -> f32 {
    0.12
}

pub(crate) fn default_combine_threshold() -> f32 {
    0.15
}

pub(crate) fn default_combine_min_top_score() -> f32 {
    0.2
}

pub(crate) fn default_max_combined() -> usize {
    3
}

pub(crate) fn default_positive_terms() -> Vec<String> {
    [
        "organic",
        "natural",
        "safe",
        "eco",
        "cruelty-free",
        "sustainable",
        "quality",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

impl Default for AnswerConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            synthesis_threshold: default_synthesis_threshold(),
            combine_threshold: default_combine_threshold(),
            combine_min_top_score: default_combine_min_top_score(),
            max_combined: default_max_combined(),
            positive_terms: default_positive_terms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseConfig {
    /// Answers at or below this confidence are replaced by the fallback message
    #[serde(default = "default_min_confidence")]
    pub min_confidence: f32,
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    #[serde(default = "default_not_understood_message")]
    pub not_understood_message: String,
    #[serde(default = "default_unavailable_message")]
    pub unavailable_message: String,
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

pub(crate) fn default_min_confidence() -> f32 {
    0.12
}

fn default_fallback_message() -> String {
    "I don't have specific information about that. I can answer questions about our products, \
     quality standards, sustainability practices, and company values."
        .to_string()
}

fn default_empty_message() -> String {
    "Please ask me a question.".to_string()
}

fn default_not_understood_message() -> String {
    "I didn't quite understand that. Could you rephrase your question?".to_string()
}

fn default_unavailable_message() -> String {
    "Knowledge base is not loaded. Please check the server logs.".to_string()
}

pub(crate) fn default_max_message_chars() -> usize {
    4000
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            min_confidence: default_min_confidence(),
            fallback_message: default_fallback_message(),
            empty_message: default_empty_message(),
            not_understood_message: default_not_understood_message(),
            unavailable_message: default_unavailable_message(),
            max_message_chars: default_max_message_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub backtrace: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            backtrace: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cors")]
    pub cors: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(crate) fn default_port() -> u16 {
    5000
}

fn default_cors() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionTopic {
    pub name: String,
    /// Substrings that route a question to this topic
    pub keywords: Vec<String>,
    pub questions: Vec<String>,
}

impl SuggestionTopic {
    fn new(name: &str, keywords: &[&str], questions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|s| (*s).to_string()).collect(),
            questions: questions.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_starters")]
    pub starters: Vec<String>,
    #[serde(default = "default_topics")]
    pub topics: Vec<SuggestionTopic>,
    /// Topic used when no keyword matches
    #[serde(default = "default_topic_name")]
    pub default_topic: String,
    #[serde(default = "default_suggestion_count")]
    pub count: usize,
}

fn default_starters() -> Vec<String> {
    [
        "What products do you offer?",
        "Are your products organic?",
        "Tell me about your sustainability practices",
        "What makes your company different?",
        "Are your products cruelty-free?",
        "Can I use your products on sensitive skin?",
        "What values does your company promote?",
    ]
    .iter()
    .map(|s| (*s).to_string())
    .collect()
}

fn default_topics() -> Vec<SuggestionTopic> {
    vec![
        SuggestionTopic::new(
            "products",
            &["product", "offer", "type", "sell", "have"],
            &[
                "What types of products do you offer?",
                "Are your products safe for daily use?",
                "Tell me about your organic products",
            ],
        ),
        SuggestionTopic::new(
            "quality",
            &["quality", "safe", "chemical", "test", "cruelty"],
            &[
                "How do you ensure product quality?",
                "Do you use harmful chemicals?",
                "Are your products cruelty-free?",
            ],
        ),
        SuggestionTopic::new(
            "sustainability",
            &["eco", "environment", "sustain", "green", "nature"],
            &[
                "Are your products eco-friendly?",
                "What are your sustainability practices?",
                "How do you protect the environment?",
            ],
        ),
        SuggestionTopic::new(
            "usage",
            &["use", "who", "age", "skin", "daily", "apply"],
            &[
                "Who can use your products?",
                "Are products suitable for all ages?",
                "Can I use products on sensitive skin?",
            ],
        ),
        SuggestionTopic::new(
            "company",
            &["mission", "value", "company", "brand", "different", "about"],
            &[
                "What is your mission?",
                "What values does your company promote?",
                "What makes your company different?",
            ],
        ),
    ]
}

fn default_topic_name() -> String {
    "company".to_string()
}

pub(crate) fn default_suggestion_count() -> usize {
    4
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            starters: default_starters(),
            topics: default_topics(),
            default_topic: default_topic_name(),
            count: default_suggestion_count(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub answer: AnswerConfig,
    #[serde(default)]
    pub response: ResponseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default config file path
    pub fn load() -> crate::Result<Self> {
        // Try to load from config.toml first, then fall back to config.example.toml
        if Path::new("config.toml").exists() {
            Self::from_file("config.toml")
        } else if Path::new("config.example.toml").exists() {
            tracing::warn!(
                "Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")
        } else {
            Err(crate::FactRagError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "No config file found. Please create config.toml or config.example.toml",
            )))
        }
    }

    /// Load from an explicit path when given, otherwise from the default locations
    pub fn load_from(path: Option<&Path>) -> crate::Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> crate::Result<()> {
        let thresholds = [
            ("index.min_relevance", self.index.min_relevance),
            ("answer.synthesis_threshold", self.answer.synthesis_threshold),
            ("answer.combine_threshold", self.answer.combine_threshold),
            ("answer.combine_min_top_score", self.answer.combine_min_top_score),
            ("response.min_confidence", self.response.min_confidence),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(crate::FactRagError::ConfigError(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        if self.index.max_features == 0 {
            return Err(crate::FactRagError::ConfigError(
                "index.max_features must be greater than 0".to_string(),
            ));
        }
        if self.answer.top_k == 0 {
            return Err(crate::FactRagError::ConfigError(
                "answer.top_k must be greater than 0".to_string(),
            ));
        }
        if self.answer.max_combined == 0 {
            return Err(crate::FactRagError::ConfigError(
                "answer.max_combined must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Get knowledge base path
    pub fn corpus_path(&self) -> &Path {
        &self.corpus.path
    }

    /// Get vocabulary cap
    pub fn max_features(&self) -> usize {
        self.index.max_features
    }

    /// Get search relevance floor
    pub fn min_relevance(&self) -> f32 {
        self.index.min_relevance
    }

    /// Get answer synthesis threshold
    pub fn synthesis_threshold(&self) -> f32 {
        self.answer.synthesis_threshold
    }

    /// Get server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

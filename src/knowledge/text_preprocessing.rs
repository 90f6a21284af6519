//! Text normalization shared by corpus indexing and query handling
//!
//! Both sides of a similarity comparison must pass through the same
//! [`TextNormalizer`], otherwise query terms and corpus terms drift apart.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Shortest token kept after splitting
const MIN_TOKEN_CHARS: usize = 2;

/// English function words that carry no retrieval signal.
fn stop_words() -> &'static HashSet<&'static str> {
    static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| {
        [
            // articles & determiners
            "the", "an", "this", "that", "these", "those",
            // be-verbs
            "is", "are", "was", "were", "be", "been", "being", "am",
            // auxiliaries
            "have", "has", "had", "do", "does", "did",
            // modals
            "will", "would", "shall", "should", "may", "might", "can", "could", "must",
            // prepositions
            "to", "of", "in", "for", "on", "with", "at", "by", "from", "into", "about",
            // conjunctions & negation
            "and", "or", "but", "not", "no", "if", "then", "than", "so", "as",
            // pronouns
            "he", "she", "it", "we", "they", "me", "him", "her", "us", "them",
            "my", "your", "yours", "his", "our", "ours", "their", "its", "you",
            // interrogatives
            "who", "what", "which", "when", "where", "how", "why",
            // adverbs
            "very", "also", "just", "too",
            // other high-frequency structural words
            "there", "here", "tell", "please",
        ]
        .into_iter()
        .collect()
    })
}

/// Returns true for words dropped by [`TextNormalizer`] when stop word removal is on
pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word)
}

/// Deterministic, total text normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextNormalizer {
    remove_stopwords: bool,
}

impl TextNormalizer {
    #[must_use]
    pub const fn new(remove_stopwords: bool) -> Self {
        Self { remove_stopwords }
    }

    #[must_use]
    pub const fn removes_stopwords(&self) -> bool {
        self.remove_stopwords
    }

    /// Normalize text into a single-space separated token string.
    ///
    /// - Lowercases
    /// - Treats every non-alphanumeric character as a separator
    /// - Drops single-character tokens and, optionally, stop words
    /// - Collapses whitespace
    ///
    /// Empty or whitespace-only input yields an empty string.
    pub fn normalize(&self, text: &str) -> String {
        self.tokenize(text).join(" ")
    }

    /// Split text into normalized tokens, in input order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|raw| raw.chars().count() >= MIN_TOKEN_CHARS)
            .map(str::to_lowercase)
            .filter(|token| !(self.remove_stopwords && is_stop_word(token)))
            .collect()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Normalize with the default normalizer (stop words removed)
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

/// Collapse runs of whitespace and control characters into single spaces.
///
/// Applied to chat messages before they are classified.
pub fn normalize_whitespace(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join(" ")
}

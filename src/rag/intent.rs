//! Lexical question-type classification

use serde::Serialize;

/// Leading words that make a question answerable with yes or no
const YES_NO_STARTERS: [&str; 8] = ["is", "are", "does", "do", "can", "will", "has", "have"];

/// Grammatical type of a question, driving how facts are combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryIntent {
    YesNo,
    What,
    Tell,
    Why,
    How,
    Who,
    Where,
    General,
}

impl QueryIntent {
    /// Classify a question by its lowercased prefix. First match wins:
    /// yes/no, what, tell, why, how, who, where, general.
    ///
    /// Prefix matching lets contractions such as "isn't" and "doesn't"
    /// count as yes/no questions.
    pub fn classify(query: &str) -> Self {
        let lower = query.trim_start().to_lowercase();

        if YES_NO_STARTERS
            .iter()
            .any(|starter| lower.starts_with(starter))
        {
            return Self::YesNo;
        }
        if lower.contains("what") {
            return Self::What;
        }
        if lower.contains("tell") || lower.contains("about") {
            return Self::Tell;
        }

        [
            ("why", Self::Why),
            ("how", Self::How),
            ("who", Self::Who),
            ("where", Self::Where),
        ]
        .into_iter()
        .find(|(prefix, _)| lower.starts_with(prefix))
        .map_or(Self::General, |(_, intent)| intent)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YesNo => "yes_no",
            Self::What => "what",
            Self::Tell => "tell",
            Self::Why => "why",
            Self::How => "how",
            Self::Who => "who",
            Self::Where => "where",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for QueryIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

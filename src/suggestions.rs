//! Follow-up question suggestions
//!
//! Questions are routed to a topic by keyword, and the reply carries that
//! topic's questions plus one question from the next topic so users can
//! wander off. Everything is deterministic: the same question always
//! produces the same suggestions.

use crate::config::SuggestionTopic;
use crate::config::SuggestionsConfig;

#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    config: SuggestionsConfig,
}

impl SuggestionEngine {
    pub fn new(config: SuggestionsConfig) -> Self {
        Self { config }
    }

    /// Conversation starters shown before the first question or after a miss
    pub fn starters(&self) -> Vec<String> {
        self.config
            .starters
            .iter()
            .take(self.config.count)
            .cloned()
            .collect()
    }

    /// Index of the first topic with a keyword in the question, else the
    /// default topic, else the first one
    fn topic_index(&self, query: &str) -> Option<usize> {
        let topics = &self.config.topics;
        if topics.is_empty() {
            return None;
        }

        let lower = query.to_lowercase();
        topics
            .iter()
            .position(|topic| {
                topic
                    .keywords
                    .iter()
                    .any(|keyword| lower.contains(&keyword.to_lowercase()))
            })
            .or_else(|| {
                topics
                    .iter()
                    .position(|topic| topic.name == self.config.default_topic)
            })
            .or(Some(0))
    }

    pub fn detect_topic(&self, query: &str) -> Option<&SuggestionTopic> {
        self.topic_index(query).map(|idx| &self.config.topics[idx])
    }

    /// Suggestions following an answered question
    pub fn follow_ups(&self, query: &str) -> Vec<String> {
        let Some(idx) = self.topic_index(query) else {
            return self.starters();
        };

        let topics = &self.config.topics;
        let mut suggestions = topics[idx].questions.clone();

        if topics.len() > 1 {
            let neighbour = &topics[(idx + 1) % topics.len()];
            if let Some(extra) = neighbour
                .questions
                .iter()
                .find(|question| !suggestions.contains(question))
            {
                suggestions.push(extra.clone());
            }
        }

        suggestions.truncate(self.config.count);
        suggestions
    }
}

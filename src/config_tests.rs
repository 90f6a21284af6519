//! Unit tests for configuration module
//!
//! These tests validate configuration parsing, defaults, and validation.

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::config::*;

    // ====== Default Value Tests ======

    #[test]
    fn test_default_index_settings() {
        assert_eq!(default_max_features(), 500);
        assert!((default_min_relevance() - 0.1).abs() < f32::EPSILON);
        assert!(default_remove_stopwords());
    }

    #[test]
    fn test_default_answer_thresholds() {
        let config = AnswerConfig::default();
        assert_eq!(config.top_k, 5);
        assert!((config.synthesis_threshold - 0.12).abs() < f32::EPSILON);
        assert!((config.combine_threshold - 0.15).abs() < f32::EPSILON);
        assert!((config.combine_min_top_score - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.max_combined, 3);
    }

    #[test]
    fn test_default_positive_terms() {
        let terms = default_positive_terms();
        assert_eq!(terms.len(), 7);
        assert!(terms.contains(&"organic".to_string()));
        assert!(terms.contains(&"cruelty-free".to_string()));
    }

    #[test]
    fn test_default_server() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, default_port());
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_default_suggestions() {
        let config = SuggestionsConfig::default();
        assert_eq!(config.count, default_suggestion_count());
        assert_eq!(config.topics.len(), 5);
        assert!(config
            .topics
            .iter()
            .any(|topic| topic.name == config.default_topic));
    }

    // ====== Parsing Tests ======

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [corpus]
            path = "facts.txt"

            [answer]
            top_k = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.corpus_path().to_str(), Some("facts.txt"));
        assert_eq!(config.answer.top_k, 3);
        assert_eq!(config.answer.max_combined, default_max_combined());
        assert_eq!(config.max_features(), 500);
        assert_eq!(config.response.max_message_chars, default_max_message_chars());
    }

    #[test]
    fn test_parse_empty_config() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.corpus_path(), default_corpus_path().as_path());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_custom_topics() {
        let config: AppConfig = toml::from_str(
            r#"
            [suggestions]
            default_topic = "menu"
            count = 2
            starters = ["What is on the menu?"]

            [[suggestions.topics]]
            name = "menu"
            keywords = ["menu", "dish"]
            questions = ["What is the dish of the day?"]
            "#,
        )
        .unwrap();

        assert_eq!(config.suggestions.topics.len(), 1);
        assert_eq!(config.suggestions.topics[0].keywords, vec!["menu", "dish"]);
        assert_eq!(config.suggestions.count, 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 8080\ncors = false").unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.server.cors);
    }

    #[test]
    fn test_from_missing_file() {
        let result = AppConfig::from_file("/definitely/not/here/config.toml");
        assert!(matches!(result, Err(crate::FactRagError::Io(_))));
    }

    #[test]
    fn test_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let result = AppConfig::from_file(file.path());
        assert!(matches!(result, Err(crate::FactRagError::TomlParsing(_))));
    }

    // ====== Validation Tests ======

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let mut config = AppConfig::default();
        config.answer.synthesis_threshold = 1.5;

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("answer.synthesis_threshold"));
    }

    #[test]
    fn test_validate_rejects_zero_top_k() {
        let mut config = AppConfig::default();
        config.answer.top_k = 0;
        assert!(matches!(
            config.validate(),
            Err(crate::FactRagError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_vocabulary() {
        let mut config = AppConfig::default();
        config.index.max_features = 0;
        assert!(config.validate().is_err());
    }
}

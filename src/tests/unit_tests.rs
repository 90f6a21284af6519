//! Pure unit tests across module boundaries
//!
//! These tests verify the corpus, index and synthesizer agree with each other.

#[cfg(test)]
mod unit_tests {
    use crate::config::IndexConfig;
    use crate::knowledge::build_index;
    use crate::knowledge::TextNormalizer;
    use crate::rag::QueryIntent;
    use crate::tests::sample_corpus;

    // ====== Corpus Tests ======

    #[test]
    fn test_sample_corpus_shape() {
        let corpus = sample_corpus();
        assert_eq!(corpus.section_count(), 7);
        assert_eq!(
            corpus.section_names(),
            vec![
                "About",
                "Products",
                "Ingredients",
                "Sustainability",
                "Usage",
                "Quality",
                "Values"
            ]
        );
        assert_eq!(corpus.sentence_count(), 25);
    }

    #[test]
    fn test_every_sentence_has_its_section() {
        let corpus = sample_corpus();
        for (i, sentence) in corpus.all_sentences().iter().enumerate() {
            let section = corpus.section_of(i).unwrap();
            assert!(corpus.section(section).unwrap().contains(sentence));
        }
        assert!(corpus.section_of(corpus.sentence_count()).is_none());
    }

    // ====== Index Tests ======

    #[test]
    fn test_index_covers_every_sentence() {
        let corpus = sample_corpus();
        let index = build_index(&corpus, &IndexConfig::default());
        assert_eq!(index.len(), corpus.sentence_count());
        assert!(index.vocabulary_size() <= IndexConfig::default().max_features);
        assert!(index.contains_term("organic"));
        assert!(!index.contains_term("the"));
    }

    #[test]
    fn test_vocabulary_cap_applies_to_sample() {
        let config = IndexConfig {
            max_features: 10,
            ..IndexConfig::default()
        };
        let index = build_index(&sample_corpus(), &config);
        assert_eq!(index.vocabulary_size(), 10);
        // "products" is among the most frequent terms
        assert!(index.contains_term("products"));
    }

    #[test]
    fn test_scores_stay_in_unit_range() {
        let index = build_index(&sample_corpus(), &IndexConfig::default());
        for query in ["organic products", "sensitive skin", "recyclable packaging"] {
            for scored in index.score(query).unwrap() {
                assert!((0.0..=1.0).contains(&scored.score), "{query}: {}", scored.score);
            }
        }
    }

    // ====== Normalizer and Intent Tests ======

    #[test]
    fn test_query_and_corpus_share_normalization() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.normalize("Are your PRODUCTS organic?"),
            normalizer.normalize("are your products organic")
        );
    }

    #[test]
    fn test_intents_for_sample_questions() {
        assert_eq!(QueryIntent::classify("Is it organic?"), QueryIntent::YesNo);
        assert_eq!(QueryIntent::classify("What is APS Naturals?"), QueryIntent::What);
        assert_eq!(
            QueryIntent::classify("Tell me about sustainability"),
            QueryIntent::Tell
        );
        assert_eq!(
            QueryIntent::classify("How do you ensure quality?"),
            QueryIntent::How
        );
        assert_eq!(
            QueryIntent::classify("Who can use your products?"),
            QueryIntent::Who
        );
        assert_eq!(QueryIntent::classify("packaging"), QueryIntent::General);
    }
}

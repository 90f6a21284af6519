//! CLI output formatting utilities
//!
//! This module provides consistent output formatting for the `FactRAG` CLI

use crate::rag::Answer;
use crate::rag::SearchResult;
use crate::AppConfig;
use crate::FactCorpus;

/// Safely truncate a string at character boundary (not byte boundary)
///
/// Facts may carry multi-byte characters, so byte slicing could panic.
#[must_use]
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Print a synthesized answer, optionally followed by the facts behind it
pub fn print_answer(query: &str, answer: &Answer, sources: &[SearchResult]) {
    println!("❓ {query}");
    match &answer.text {
        Some(text) => {
            let intent = answer
                .intent
                .map_or_else(|| "-".to_string(), |intent| intent.to_string());
            println!("💬 {text}");
            println!("   confidence: {:.3} | intent: {intent}", answer.confidence);
        }
        None => print_warning("No answer found in the knowledge base"),
    }

    if !sources.is_empty() {
        println!();
        print_search_results(sources);
    }
}

/// Print ranked facts
pub fn print_search_results(results: &[SearchResult]) {
    if results.is_empty() {
        print_warning("No relevant facts found");
        return;
    }

    println!("🔍 Found {} relevant facts:", results.len());
    for (rank, result) in results.iter().enumerate() {
        println!(
            "  {}. [{:.3}] [{}] {}",
            rank + 1,
            result.score,
            result.section,
            truncate_str(&result.text, 120)
        );
    }
}

/// Print knowledge base statistics
pub fn print_knowledge_info(corpus: &FactCorpus, vocabulary_size: usize) {
    println!("📚 Knowledge Base:");
    println!("  Facts: {}", corpus.sentence_count());
    println!("  Sections: {}", corpus.section_count());
    println!("  Vocabulary: {vocabulary_size} terms");
    println!();
    print_section_list(corpus);
}

/// Print section names with their fact counts
pub fn print_section_list(corpus: &FactCorpus) {
    println!("📑 Sections:");
    for section in corpus.sections() {
        println!("  - {} ({} facts)", section.name, section.sentences.len());
    }
}

/// Print all facts of one section
pub fn print_section(name: &str, sentences: &[String]) {
    println!("📑 [{name}] ({} facts)", sentences.len());
    for sentence in sentences {
        println!("  - {sentence}");
    }
}

pub fn print_config(config: &AppConfig) {
    println!("📋 FactRAG Configuration:");
    println!();

    println!("📚 Corpus:");
    println!("  Path: {}", config.corpus_path().display());
    println!();

    println!("🔢 Index:");
    println!("  Max features: {}", config.max_features());
    println!("  Min relevance: {}", config.min_relevance());
    println!("  Remove stopwords: {}", config.index.remove_stopwords);
    println!();

    println!("💬 Answer:");
    println!("  Top k: {}", config.answer.top_k);
    println!("  Synthesis threshold: {}", config.synthesis_threshold());
    println!("  Combine threshold: {}", config.answer.combine_threshold);
    println!(
        "  Combine min top score: {}",
        config.answer.combine_min_top_score
    );
    println!("  Max combined: {}", config.answer.max_combined);
    println!();

    println!("🗨️  Response:");
    println!("  Min confidence: {}", config.response.min_confidence);
    println!("  Max message chars: {}", config.response.max_message_chars);
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🌐 Server:");
    println!("  Address: {}", config.server_addr());
    println!("  CORS: {}", config.server.cors);
    println!();

    println!("💡 Suggestions:");
    println!("  Starters: {}", config.suggestions.starters.len());
    println!(
        "  Topics: {}",
        config
            .suggestions
            .topics
            .iter()
            .map(|topic| topic.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Count: {}", config.suggestions.count);
}

pub fn print_info(msg: &str) {
    println!("ℹ️  {msg}");
}

pub fn print_success(msg: &str) {
    println!("✅ {msg}");
}

pub fn print_warning(msg: &str) {
    println!("⚠️  {msg}");
}

pub fn print_error(msg: &str) {
    println!("❌ {msg}");
}

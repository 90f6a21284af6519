use factrag::load_corpus;
use factrag::AppConfig;
use factrag::Result;

#[tokio::main]
async fn main() -> Result<()> {
    factrag::logging::init_simple_logging()?;
    println!("🔍 Checking configuration...");

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            println!("❌ Configuration error: {e}");
            println!("\n💡 To fix this:");
            println!("  1. Copy config.example.toml to config.toml");
            println!("  2. Point corpus.path at your knowledge base file");
            println!("  3. Run this check again");
            return Err(e);
        }
    };

    println!("✅ Configuration loaded successfully!");
    println!("📋 Configuration details:");
    println!("  Corpus path: {}", config.corpus_path().display());
    println!("  Max features: {}", config.max_features());
    println!("  Min relevance: {}", config.min_relevance());
    println!("  Synthesis threshold: {}", config.synthesis_threshold());
    println!("  Top k: {}", config.answer.top_k);
    println!("  Server address: {}", config.server_addr());

    println!("\n🔍 Checking knowledge base...");
    match load_corpus(config.corpus_path()) {
        Ok(corpus) => {
            println!(
                "✅ Knowledge base loaded: {} facts in {} sections",
                corpus.sentence_count(),
                corpus.section_count()
            );
            for name in corpus.section_names() {
                println!("  - {name}");
            }
        }
        Err(e) => {
            println!("❌ Knowledge base error: {e}");
            println!("\n💡 The server will still start, but in degraded mode.");
            return Err(e);
        }
    }

    println!("\n🎉 Configuration check completed successfully!");
    Ok(())
}

//! CLI command definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(name = "factrag")]
#[command(about = "FactRAG CLI tool for answering questions from a sectioned fact corpus")]
#[command(version)]
pub struct Cli {
    /// Enable verbose debug logging (default: info level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to a config file (default: config.toml, then config.example.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single question
    Ask {
        /// The question
        query: String,
        /// Show the ranked facts behind the answer
        #[arg(short, long)]
        sources: bool,
    },
    /// Show the ranked facts for a query
    Search {
        /// Search query
        query: String,
        /// Maximum number of results
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },
    /// Show the relevant facts for a query grouped by section
    Context {
        /// Search query
        query: String,
        /// Maximum number of facts
        #[arg(short, long, default_value = "5")]
        max: usize,
    },
    /// Interactive console chat
    Chat,
    /// Show knowledge base statistics
    Info,
    /// List sections, or show the facts of one section
    Section {
        /// Section name
        name: Option<String>,
    },
    /// Show current configuration
    Config,
    /// Serve the chat API over HTTP
    Serve {
        /// Host to bind (default: from config)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind (default: from config)
        #[arg(short, long)]
        port: Option<u16>,
        /// Disable CORS
        #[arg(long)]
        no_cors: bool,
    },
}

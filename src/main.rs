use clap::Parser;
use factrag::cli::*;
use factrag::config::AppConfig;
use factrag::RagService;
use factrag::Result;
use tracing::info;

/// Load the corpus and build the index, reporting failures on the console
fn load_service(config: &AppConfig) -> Result<RagService> {
    RagService::from_config(config).inspect_err(|e| {
        print_error(&format!("Failed to load knowledge base: {e}"));
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load_from(cli.config.as_deref())?;

    // Initialize logging
    if cli.verbose {
        factrag::logging::init_logging_with_level("debug")?;
    } else {
        factrag::logging::init_logging_with_config(Some(&config))?;
    }
    info!("Configuration loaded successfully");

    // Execute the requested command
    match cli.command {
        Commands::Ask { query, sources } => {
            let service = load_service(&config)?;
            handle_ask(&service, &query, sources)?;
        }
        Commands::Search { query, limit } => {
            let service = load_service(&config)?;
            handle_search(&service, &query, limit)?;
        }
        Commands::Context { query, max } => {
            let service = load_service(&config)?;
            handle_context(&service, &query, max)?;
        }
        Commands::Chat => {
            let service = load_service(&config)?;
            handle_chat(&service)?;
        }
        Commands::Info => {
            let service = load_service(&config)?;
            handle_info(&service)?;
        }
        Commands::Section { name } => {
            let service = load_service(&config)?;
            handle_section(&service, name.as_deref())?;
        }
        Commands::Config => {
            handle_config_command(&config)?;
        }
        Commands::Serve {
            host,
            port,
            no_cors,
        } => {
            handle_serve_api(&config, host, port, no_cors).await?;
        }
    }

    Ok(())
}

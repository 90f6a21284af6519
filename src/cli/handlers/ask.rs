//! Question answering handlers

use crate::cli::output::*;
use crate::rag::ContextAssembler;
use crate::RagService;
use crate::Result;

pub fn handle_ask(service: &RagService, query: &str, show_sources: bool) -> Result<()> {
    let answer = service.generate_answer(query)?;
    let sources = if show_sources {
        &answer.sources[..]
    } else {
        &answer.sources[..0]
    };

    print_answer(query, &answer, sources);
    Ok(())
}

pub fn handle_search(service: &RagService, query: &str, limit: usize) -> Result<()> {
    print_info(&format!("Searching for: \"{query}\""));
    let results = service.search(query, limit)?;
    println!("{}", ContextAssembler::new(limit).create_summary(&results));
    Ok(())
}

pub fn handle_context(service: &RagService, query: &str, max_sentences: usize) -> Result<()> {
    match service.relevant_context(query, max_sentences)? {
        Some(context) => println!("{context}"),
        None => print_warning("No relevant context found"),
    }
    Ok(())
}

//! Interactive console chat

use std::io::BufRead;
use std::io::Write;
use std::io::{
    self,
};

use tracing::debug;

use crate::cli::output::*;
use crate::FactRagError;
use crate::RagService;
use crate::Result;

const EXIT_WORDS: [&str; 4] = ["exit", "quit", "bye", "goodbye"];

fn is_exit_command(line: &str) -> bool {
    EXIT_WORDS.contains(&line.trim().to_lowercase().as_str())
}

pub fn handle_chat(service: &RagService) -> Result<()> {
    println!("💬 FactRAG chat");
    println!("   Ask a question, or type 'exit' to leave.");
    println!();
    for starter in service.suggestions().starters() {
        println!("   - {starter}");
    }
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let turns = run_chat(service, stdin.lock(), &mut stdout)?;
    print_success(&format!("Chat ended after {turns} questions. Goodbye!"));
    Ok(())
}

/// Drive a chat session over arbitrary input and output.
///
/// Returns the number of questions answered before the session ended.
pub fn run_chat<R: BufRead, W: Write>(service: &RagService, input: R, output: &mut W) -> Result<usize> {
    let mut turns = 0;
    write!(output, "You: ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "You: ")?;
            output.flush()?;
            continue;
        }
        if is_exit_command(&line) {
            debug!("Chat exit requested");
            break;
        }

        match service.respond(&line) {
            Ok(reply) => {
                writeln!(output, "Bot: {}", reply.response)?;
                if !reply.suggestions.is_empty() {
                    writeln!(output, "     Try: {}", reply.suggestions.join(" | "))?;
                }
                turns += 1;
            }
            Err(FactRagError::InvalidInput(message)) => {
                writeln!(output, "Bot: {message}")?;
            }
            Err(e) => return Err(e),
        }

        write!(output, "You: ")?;
        output.flush()?;
    }

    writeln!(output)?;
    Ok(turns)
}

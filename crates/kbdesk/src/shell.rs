// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kbdesk shell` command implementation.
//!
//! Interactive loop over the same orchestrator the HTTP API uses. Prints the
//! chosen specialist before each answer and keeps going after errors.

use std::sync::Arc;

use colored::Colorize;
use kbdesk_config::model::KbdeskConfig;
use kbdesk_core::{ChatAnswer, KbdeskError};
use kbdesk_foundry::{build_orchestrator, DefaultCredential};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::serve::init_tracing;

const EXIT_COMMANDS: &[&str] = &["quit", "exit", "q"];

/// Runs the `kbdesk shell` interactive REPL.
pub async fn run_shell(config: KbdeskConfig) -> Result<(), KbdeskError> {
    // Routing decisions are printed directly; keep the log quiet.
    init_tracing("warn");

    let mut rl = DefaultEditor::new()
        .map_err(|e| KbdeskError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "kbdesk shell".bold().green());
    println!(
        "Ask about HR, marketing or products. Type {} to exit.\n",
        "quit".yellow()
    );

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if is_exit_command(trimmed) {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                if let Err(e) = handle_query(&config, trimmed).await {
                    eprintln!("{}: {e}", "error".red());
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "bye".dimmed());
    Ok(())
}

fn is_exit_command(input: &str) -> bool {
    EXIT_COMMANDS
        .iter()
        .any(|command| input.eq_ignore_ascii_case(command))
}

async fn handle_query(config: &KbdeskConfig, query: &str) -> Result<(), KbdeskError> {
    let credential = Arc::new(DefaultCredential::from_config(&config.foundry)?);
    let orchestrator = build_orchestrator(config, credential)?;

    let category = orchestrator.route(query).await?;
    println!(
        "{} {}",
        "routing to".dimmed(),
        category.agent_id().cyan().bold()
    );

    let answer = orchestrator.dispatcher().answer(category, query).await?;
    print_answer(&answer);
    Ok(())
}

fn print_answer(answer: &ChatAnswer) {
    println!("\n{}\n", answer.text);
    if answer.sources.is_empty() {
        return;
    }
    println!("{}", "sources:".dimmed());
    for line in source_lines(answer) {
        println!("  {}", line.dimmed());
    }
    println!();
}

fn source_lines(answer: &ChatAnswer) -> Vec<String> {
    answer
        .sources
        .iter()
        .map(|source| {
            let label = source
                .title
                .as_deref()
                .or(source.filepath.as_deref())
                .or(source.url.as_deref())
                .unwrap_or("(untitled)");
            match source.filepath.as_deref() {
                Some(path) if Some(path) != source.title.as_deref() => {
                    format!("[{}] {label} ({path})", source.kb)
                }
                _ => format!("[{}] {label}", source.kb),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbdesk_core::{Category, SourceReference};

    #[test]
    fn exit_commands_are_case_insensitive() {
        for input in ["quit", "EXIT", "Q", "Quit"] {
            assert!(is_exit_command(input), "{input}");
        }
        for input in ["", "quitting", "question", "hr"] {
            assert!(!is_exit_command(input), "{input}");
        }
    }

    #[test]
    fn source_lines_prefer_title_then_path() {
        let mut titled = SourceReference::new(Category::Hr, "kb1-hr");
        titled.title = Some("PTO_Policy_2024.docx".into());
        titled.filepath = Some("hr-policies/PTO_Policy_2024.docx".into());

        let mut url_only = SourceReference::new(Category::Hr, "kb1-hr");
        url_only.url = Some("https://example.net/doc".into());

        let answer = ChatAnswer {
            category: Category::Hr,
            text: "ok".into(),
            sources: vec![titled, url_only],
        };

        assert_eq!(
            source_lines(&answer),
            vec![
                "[kb1-hr] PTO_Policy_2024.docx (hr-policies/PTO_Policy_2024.docx)",
                "[kb1-hr] https://example.net/doc",
            ]
        );
    }
}

// SPDX-FileCopyrightText: 2026 Kbdesk Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! kbdesk - knowledge-base help desk.
//!
//! This is the binary entry point: HTTP server, interactive shell, and an
//! offline routing check.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod route;
mod serve;
mod shell;

use clap::{Parser, Subcommand};
use colored::Colorize;

/// kbdesk - routes questions to HR, marketing and product knowledge agents.
#[derive(Parser, Debug)]
#[command(name = "kbdesk", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP API (default).
    Serve,
    /// Ask questions interactively from the terminal.
    Shell,
    /// Print the category a query routes to, without calling any agent.
    ///
    /// Reads no configuration.
    Route {
        /// Query text. Multiple words are joined with spaces.
        #[arg(required = true)]
        text: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve::run_serve(load_config_or_exit()).await,
        Commands::Shell => shell::run_shell(load_config_or_exit()).await,
        Commands::Route { text } => {
            route::run_route(&text.join(" "));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {e}", "error".red());
        std::process::exit(1);
    }
}

/// Loads and validates configuration, rendering diagnostics and exiting on failure.
fn load_config_or_exit() -> kbdesk_config::KbdeskConfig {
    match kbdesk_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            kbdesk_config::render_errors(&errors);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        // Only jemalloc supports advancing the epoch.
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_parses() {
        let cli = Cli::try_parse_from(["kbdesk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn route_joins_words() {
        let cli = Cli::try_parse_from(["kbdesk", "route", "brand", "campaign"]).unwrap();
        match cli.command {
            Some(Commands::Route { text }) => assert_eq!(text.join(" "), "brand campaign"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn route_requires_text() {
        assert!(Cli::try_parse_from(["kbdesk", "route"]).is_err());
    }
}

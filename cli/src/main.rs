//! # Responder Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the Responder CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start an interactive session
//! responder chat
//!
//! # One-shot reply with informational logging on stderr
//! responder -v ask why does it crash
//! ```
//!
use clap::Parser;
use responder::commands;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "responder",
    about = "A keyword-driven technical support responder",
    long_about = "Answers support questions with canned replies.\n\
                  Known trigger words get a fixed reply; anything else gets a random fallback\n\
                  reply read from a text file (default.txt).",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive support session.
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Print a single reply for the given words.
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    /// List the trigger words with a fixed reply.
    #[command(alias = "k")]
    Keywords(commands::keywords::KeywordsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Chat(args) => commands::chat::handle_chat(args),
        Commands::Ask(args) => commands::ask::handle_ask(args),
        Commands::Keywords(args) => commands::keywords::handle_keywords(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

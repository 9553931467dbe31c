//! # Responder Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One-shot form of the session (`responder ask <WORDS>...`): the words are
//! tokenized exactly like a chat line and a single reply is printed.
//!
//! ```bash
//! responder ask my machine is slow
//! responder ask --seed 7 --defaults ./replies.txt "anything else?"
//! ```
//!
use crate::commands::{prepare_session, SessionArgs};
use crate::common::input::tokenize;
use crate::core::config;
use crate::core::error::Result;
use clap::Args;
use std::io::{self, Write};
use tracing::{debug, info};

/// Arguments for `responder ask`.
#[derive(Args, Debug)]
pub struct AskArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// The user's input. Quoting is optional; all words are joined.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

pub fn handle_ask(args: AskArgs) -> Result<()> {
    info!("Handling ask command with args: {:?}", args);
    let config = config::load_config()?;
    let (responder, mut rng) = prepare_session(&args.session, &config);

    let words = tokenize(&args.words.join(" "));
    debug!("Input words: {:?}", words);
    let response = responder.generate_response(&words, &mut rng);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", response.trim_end())?;
    Ok(())
}

//! # Responder Chat Command
//!
//! File: cli/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The interactive support session (`responder chat`). It greets the user,
//! then reads one line at a time, hands the words of each line to the
//! `Responder`, and prints the reply, until the exit word or end of input.
//!
//! ## Examples
//!
//! ```bash
//! responder chat
//! responder chat --defaults ./replies.txt --seed 42
//! printf 'my pc is slow\nbye\n' | responder chat
//! ```
//!
//! The session loop is generic over its input and output so tests can drive
//! it with in-memory buffers.
//!
use crate::commands::{prepare_session, SessionArgs};
use crate::common::input::{is_exit, tokenize};
use crate::core::config::{self, ChatConfig};
use crate::core::error::{ResponderError, Result};
use crate::responder::Responder;
use anyhow::Context;
use clap::Args;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Arguments for `responder chat`.
#[derive(Args, Debug)]
pub struct ChatArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads configuration, builds the responder, and runs the session on the
/// process's stdin/stdout.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` once the user leaves. Only configuration errors and
///   terminal I/O errors are reported; a broken fallback file is not an error.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);
    let config = config::load_config()?;
    let (responder, mut rng) = prepare_session(&args.session, &config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(
        &responder,
        &mut rng,
        &config.chat,
        stdin.lock(),
        stdout.lock(),
    )
}

/// Runs the read-respond loop until the exit word or end of input.
pub fn run_session<R, I, O>(
    responder: &Responder,
    rng: &mut R,
    chat: &ChatConfig,
    mut input: I,
    mut output: O,
) -> Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    print_welcome(&mut output, chat)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush().context("Failed to flush prompt")?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .map_err(ResponderError::from)
            .context("Failed to read input line")?;
        if read == 0 {
            debug!("End of input, closing session");
            writeln!(output)?;
            break;
        }
        if is_exit(&line, &chat.exit_word) {
            break;
        }

        let words = tokenize(&line);
        debug!("Input words: {:?}", words);
        let response = responder.generate_response(&words, rng);
        writeln!(output, "{}\n", response.trim_end())?;
    }

    print_goodbye(&mut output)?;
    Ok(())
}

fn print_welcome<O: Write>(output: &mut O, chat: &ChatConfig) -> Result<()> {
    writeln!(output, "Welcome to the {} System.", chat.bot_name)?;
    writeln!(output, "Please tell us about your problem.")?;
    writeln!(output, "We will assist you with any problem you might have.")?;
    writeln!(output, "Please type '{}' to exit our system.", chat.exit_word)?;
    Ok(())
}

fn print_goodbye<O: Write>(output: &mut O) -> Result<()> {
    writeln!(output, "Nice talking to you. Bye...")?;
    Ok(())
}

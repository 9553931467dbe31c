//! # Responder Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The top-level commands of the Responder CLI and the setup they share.
//!
//! ## Command Groups
//!
//! - `chat`: interactive support session reading lines from stdin
//! - `ask`: one-shot reply for words given on the command line
//! - `keywords`: lists the trigger words the responder recognises
//!
//! Each command defines its own arguments structure and handler function.
//! `chat` and `ask` both flatten [`SessionArgs`] and build their responder and
//! random generator through [`prepare_session`], so flag and config handling
//! stays identical between them.
//!
use crate::core::config::Config;
use crate::responder::Responder;
use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{debug, info};

/// One-shot reply.
pub mod ask;
/// Interactive support session.
pub mod chat;
/// Trigger word listing.
pub mod keywords;

/// Options shared by every command that produces responses.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// File with fallback responses, one per line. Overrides `fallback.file`.
    #[arg(long, short = 'd', env = "RESPONDER_DEFAULTS")]
    pub defaults: Option<PathBuf>,

    /// Seed for fallback selection, for reproducible sessions. Overrides `chat.seed`.
    #[arg(long, short = 's')]
    pub seed: Option<u64>,
}

/// Builds the responder and the session's random generator. CLI flags win
/// over the configuration file.
pub fn prepare_session(args: &SessionArgs, config: &Config) -> (Responder, StdRng) {
    let defaults = args
        .defaults
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.fallback.file));
    info!("Loading fallback responses from {}", defaults.display());
    let responder = Responder::with_defaults_file(&defaults);
    debug!(
        "Responder ready: {} keywords, {} fallback responses",
        responder.table().len(),
        responder.pool().len()
    );

    let rng = match args.seed.or(config.chat.seed) {
        Some(seed) => {
            debug!("Seeding fallback selection with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    (responder, rng)
}

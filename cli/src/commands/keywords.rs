//! # Responder Keywords Command
//!
//! File: cli/src/commands/keywords.rs
//! Author: Christi Mahu
//!
//! Prints every trigger word of the built-in table, one per line, sorted.
//!
use crate::core::error::Result;
use crate::responder::KeywordTable;
use clap::Args;
use std::io::{self, Write};

/// Arguments for `responder keywords` (none yet).
#[derive(Args, Debug)]
pub struct KeywordsArgs {}

pub fn handle_keywords(_args: KeywordsArgs) -> Result<()> {
    let table = KeywordTable::build();
    let mut stdout = io::stdout().lock();
    write_keywords(&table, &mut stdout)
}

fn write_keywords<W: Write>(table: &KeywordTable, out: &mut W) -> Result<()> {
    for word in table.keywords() {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

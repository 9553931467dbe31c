//! # Fallback Pool
//!
//! File: cli/src/responder/fallback.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The ordered list of generic replies used when no trigger word matches. It is
//! loaded once at startup from a line-oriented, 7-bit ASCII text file (one
//! response per line) and never changes afterwards.
//!
//! ## Failure Handling
//!
//! Loading never fails from the caller's point of view:
//! - A file that cannot be opened is logged as a warning and contributes nothing.
//! - A read error or a non-ASCII line is logged as a warning; the lines read before
//!   it are kept and the rest of the file is ignored.
//!
//! Whatever happens, the pool ends up with at least one entry: when nothing usable
//! was read, the single entry [`SYNTHETIC_FALLBACK`] is inserted.
//!
//! ## Normalization
//!
//! Line terminators (`\n` or `\r\n`) are stripped and no separator is appended.
//! Lines that are blank after trimming are skipped, since they would produce an
//! empty reply.
//!
use crate::core::error::ResponderError;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, warn};

/// The entry inserted when no fallback response could be loaded.
pub const SYNTHETIC_FALLBACK: &str = "Could you elaborate on that?";

/// Non-empty list of fallback responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackPool {
    entries: Vec<String>,
}

impl FallbackPool {
    /// Loads the pool from the file at `path`.
    ///
    /// The file is opened, drained and closed before this returns, on every
    /// path. Problems are logged and absorbed; see the module docs.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::from_reader(path, BufReader::new(file)),
            Err(e) => {
                let err = if e.kind() == std::io::ErrorKind::NotFound {
                    ResponderError::ResourceNotFound {
                        path: path.to_path_buf(),
                    }
                } else {
                    ResponderError::ResourceRead {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    }
                };
                warn!("{}", err);
                Self::from_entries(Vec::<String>::new())
            }
        }
    }

    /// Reads fallback responses from any buffered reader. `path` is only used
    /// in log messages.
    pub fn from_reader<R: BufRead>(path: &Path, mut reader: R) -> Self {
        let mut entries = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) => {
                    warn!(
                        "{}",
                        ResponderError::ResourceRead {
                            path: path.to_path_buf(),
                            reason: format!("line {}: {}", line_no + 1, e),
                        }
                    );
                    break;
                }
            }
            line_no += 1;

            let line = match std::str::from_utf8(&buf) {
                Ok(line) if line.is_ascii() => line,
                _ => {
                    warn!(
                        "{}",
                        ResponderError::ResourceRead {
                            path: path.to_path_buf(),
                            reason: format!("line {} is not 7-bit ASCII", line_no),
                        }
                    );
                    break;
                }
            };
            let line = line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                debug!("Skipping blank line {} in {}", line_no, path.display());
                continue;
            }
            entries.push(line.to_string());
        }

        info!(
            "Loaded {} fallback responses from {}",
            entries.len(),
            path.display()
        );
        Self::from_entries(entries)
    }

    /// Builds a pool from in-memory responses, applying the same blank-entry
    /// filtering and non-empty guarantee as [`FallbackPool::load`].
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries
            .into_iter()
            .map(Into::into)
            .filter(|e| !e.trim().is_empty())
            .collect();
        if entries.is_empty() {
            debug!("No fallback responses available, using the synthetic entry");
            entries.push(SYNTHETIC_FALLBACK.to_string());
        }
        Self { entries }
    }

    /// Picks one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.gen_range(0..self.entries.len());
        &self.entries[index]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true; the pool always holds at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, response: &str) -> bool {
        self.entries.iter().any(|e| e == response)
    }
}

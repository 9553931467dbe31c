//! # Response Selector
//!
//! File: cli/src/responder/selector.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Chooses the reply for a set of input words:
//! 1. Walk the words in the order the caller supplies them.
//! 2. The first word found in the [`KeywordTable`] decides the reply.
//! 3. If none matches (or there are no words), pick uniformly from the [`FallbackPool`].
//!
//! Case folding and punctuation stripping are the caller's job (see
//! `crate::common::input::tokenize`). Callers wanting deterministic keyword selection
//! should pass an ordered sequence; a `HashSet` works but its iteration order,
//! and therefore which of several triggers wins, is unspecified.
//!
//! ## Concurrency
//!
//! `Responder` holds only read-only data and is `Send + Sync`. The random
//! generator is passed in on each call, so concurrent callers each bring their
//! own generator and no locking is needed.
//!
//! ```rust,ignore
//! let responder = Responder::with_defaults_file("default.txt");
//! let mut rng = StdRng::seed_from_u64(42);
//! println!("{}", responder.generate_response(["my", "pc", "is", "slow"], &mut rng));
//! ```
//!
use super::fallback::FallbackPool;
use super::keywords::KeywordTable;
use rand::Rng;
use std::path::Path;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Responder {
    table: KeywordTable,
    pool: FallbackPool,
}

impl Responder {
    pub fn new(table: KeywordTable, pool: FallbackPool) -> Self {
        Self { table, pool }
    }

    /// Built-in keyword table plus fallback responses loaded from `path`.
    /// Never fails; a missing or broken file only degrades the fallback pool.
    pub fn with_defaults_file(path: impl AsRef<Path>) -> Self {
        Self::new(KeywordTable::build(), FallbackPool::load(path))
    }

    /// Returns the response for `words`. Never empty.
    pub fn generate_response<I, S, R>(&self, words: I, rng: &mut R) -> &str
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        for word in words {
            let word = word.as_ref();
            if let Some(response) = self.table.get(word) {
                trace!("Matched trigger word '{}'", word);
                return response;
            }
        }
        trace!("No trigger word matched, picking a fallback response");
        self.pool.pick(rng)
    }

    pub fn table(&self) -> &KeywordTable {
        &self.table
    }

    pub fn pool(&self) -> &FallbackPool {
        &self.pool
    }
}

//! # Response Engine
//!
//! File: cli/src/responder/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The rule-based core of the application. Given the words of one input line it
//! returns a canned multi-line reply, either from a fixed keyword table or, when
//! no keyword matches, chosen at random from a pool of fallback replies.
//!
//! ## Architecture
//!
//! - `keywords`: the static trigger word to response table (`KeywordTable`)
//! - `fallback`: fallback replies loaded from a text file (`FallbackPool`)
//! - `selector`: composes both into `Responder::generate_response`
//!
//! Both data structures are built once at startup and never mutated. The only
//! mutable state is the random generator, which callers own and pass in.
//!
pub mod fallback;
pub mod keywords;
pub mod selector;

pub use fallback::{FallbackPool, SYNTHETIC_FALLBACK};
pub use keywords::KeywordTable;
pub use selector::Responder;

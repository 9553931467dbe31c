//! # Responder Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A minimal rule-based technical support responder. Given the words of a
//! line of user input it returns a canned reply, chosen by matching a word
//! against a fixed keyword table or, when nothing matches, picked at random
//! from fallback replies loaded from a text file.
//!
//! The library exposes the response engine for integration tests and other
//! crates; `main.rs` builds the `responder` CLI on top of it.
//!
//! ```rust,no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use responder::common::input::tokenize;
//! use responder::responder::Responder;
//!
//! let responder = Responder::with_defaults_file("default.txt");
//! let mut rng = StdRng::seed_from_u64(42);
//! let words = tokenize("Installation keeps failing");
//! println!("{}", responder.generate_response(&words, &mut rng));
//! ```
//!
pub mod commands; // Command handlers (chat, ask, keywords)
pub mod common; // Shared helpers (input tokenizing)
pub mod core; // Configuration and errors
pub mod responder; // Keyword table, fallback pool, selector

//! # Responder Shared Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Helpers used by the command handlers that are not part of the response
//! engine itself.
//!

/// Turning user input lines into ordered word lists.
pub mod input;

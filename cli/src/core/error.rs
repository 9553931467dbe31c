//! # Responder Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout the Responder
//! application.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ResponderError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! Two very different classes of error live here:
//! - Configuration and terminal I/O errors, which propagate to `main` and end the process.
//! - Fallback resource errors (`ResourceNotFound`, `ResourceRead`), which are only ever
//!   built inside `FallbackPool::load`, logged as warnings and then dropped. They never
//!   reach a caller of `Responder::generate_response`.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if config.chat.exit_word.is_empty() {
//!     return Err(anyhow!(ResponderError::Config("exit_word cannot be empty".into())));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the Responder application.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unable to open {}", .path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("A problem was encountered reading {}: {reason}", .path.display())]
    ResourceRead { path: PathBuf, reason: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

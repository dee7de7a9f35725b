//! Error types for Pathstate operations.
//!
//! This module provides the main error type [`PathstateError`] which wraps
//! the error conditions that can occur while configuring a router or
//! resolving a path.

use std::io;

use thiserror::Error;

use pathstate_parser::{ConfigError, error::Diagnostic};

/// The main error type for Pathstate operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the path it was raised for, so that the label
/// spans of the [`Diagnostic`] can be rendered against it.
#[derive(Debug, Error)]
pub enum PathstateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{err}")]
    Parse { err: Diagnostic, src: String },
}

impl PathstateError {
    /// Create a new `Parse` error with the path it was raised for.
    pub fn new_parse_error(err: Diagnostic, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

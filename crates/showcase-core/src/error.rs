//! Error types for Showcase operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Showcase crates. Uses `thiserror` for derive macros.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Showcase operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on a specific file or directory.
    #[error("I/O error at {}: {source}", .path.display())]
    IoWithPath {
        /// The path that could not be read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A glob or regex pattern could not be built.
    #[error("Invalid pattern: {0}")]
    Pattern(String),
}

impl Error {
    /// Wrap an I/O error together with the path it occurred on.
    pub fn io_with_path(err: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::IoWithPath {
            path: path.as_ref().to_path_buf(),
            source: err,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid pattern error.
    pub fn pattern(msg: impl Into<String>) -> Self {
        Self::Pattern(msg.into())
    }
}

/// Result type alias using Showcase's Error type.
pub type Result<T> = std::result::Result<T, Error>;

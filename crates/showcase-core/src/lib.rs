//! Showcase Core — shared errors and utilities.
//!
//! This crate has no internal Showcase dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`util`]: File discovery and path utilities

#![doc = include_str!("../README.md")]

pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use util::files::{FileInfo, FindOptions};

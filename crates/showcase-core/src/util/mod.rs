//! Utility modules for file operations and path handling.
//!
//! # Modules
//!
//! - [`files`]: File discovery and reading utilities
//! - [`paths`]: Path resolution helpers (binary location, tilde expansion)

pub mod files;
pub mod paths;

//! Path resolution utilities.
//!
//! Showcase keeps its template (and optional `showcase.toml`) next to the
//! installed binary rather than taking them from the command line. These
//! helpers find that install location and the resources around it.

use std::env;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Maximum number of parent directories to walk when searching for a marker.
pub const MAX_WALK_LEVELS: usize = 10;

/// Returns the absolute path to the currently running binary.
pub fn binary_path() -> Option<PathBuf> {
    env::current_exe().ok()
}

/// Returns the directory containing the currently running binary.
pub fn binary_dir() -> Option<PathBuf> {
    binary_path().and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Walks up the directory tree from `start` looking for a directory containing `marker`.
///
/// `start` itself is checked first. Returns the directory containing the
/// marker, or None if not found within [`MAX_WALK_LEVELS`] iterations.
pub fn find_dir_with_marker<P: AsRef<Path>>(start: P, marker: &str) -> Option<PathBuf> {
    let mut current = start.as_ref().to_path_buf();

    for _ in 0..MAX_WALK_LEVELS {
        if current.join(marker).exists() {
            return Some(current);
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Locate the directory holding the resource file `name`, starting at the
/// binary's own directory.
///
/// During development the binary lives under `target/<profile>/`, so the
/// walk up the tree lets a resource at the workspace root be found too.
pub fn resource_dir(name: &str) -> Result<PathBuf> {
    let start = binary_dir()
        .ok_or_else(|| Error::not_found("could not determine the binary's directory"))?;
    find_dir_with_marker(&start, name).ok_or_else(|| {
        Error::not_found(format!(
            "{} not found in {} or its parent directories",
            name,
            start.display()
        ))
    })
}

/// Expands `~` to the user's home directory.
///
/// If the path starts with `~`, replaces it with the user's home directory.
/// Otherwise returns the path unchanged.
///
/// # Example
///
/// ```
/// use showcase_core::util::paths::expand_tilde;
///
/// let expanded = expand_tilde("~/notes");
/// assert!(!expanded.starts_with("~"));
/// ```
pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

//! File utilities for the Showcase crates.
//!
//! Provides file discovery and reading operations used by the content
//! scanner. Discovery is glob-based, so results come back in alphabetical
//! order and repeated runs over an unchanged tree see the same sequence.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};

use crate::{Error, Result};

/// Options for discovering files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md"
    pub extension: Option<&'static str>,
}

impl FindOptions {
    /// Create options for finding markdown files.
    pub fn markdown() -> Self {
        Self {
            extension: Some("md"),
        }
    }

    /// Build the recursive glob pattern for `base_path`.
    ///
    /// The base path is escaped so directory names containing glob
    /// metacharacters (`[`, `*`, `?`) are matched literally.
    pub fn pattern_for(&self, base_path: &Path) -> Result<String> {
        let base = base_path.to_str().ok_or_else(|| {
            Error::pattern(format!(
                "path is not valid UTF-8: {}",
                base_path.display()
            ))
        })?;
        let leaf = match self.extension {
            Some(ext) => format!("*.{}", ext),
            None => "*".to_string(),
        };
        Ok(format!("{}/**/{}", Pattern::escape(base), leaf))
    }

}

fn match_options() -> MatchOptions {
    MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// Find all files matching criteria under a directory, recursively.
///
/// Entries the walker cannot read (permission errors on a subdirectory,
/// vanished files) are skipped and logged at debug level. Directories whose
/// name happens to carry the extension are not returned. A base path that
/// does not exist yields an empty list.
///
/// Symlinked directories below `base_path` are not descended into; symlinked
/// files are returned. The base path itself must be valid UTF-8, since it
/// becomes part of the glob pattern; otherwise this fails with
/// [`Error::Pattern`]. Names below it are not restricted.
///
/// # Example
///
/// ```no_run
/// # use showcase_core::util::files::{find_all_files, FindOptions};
/// # use std::path::Path;
/// # fn example() -> showcase_core::Result<()> {
/// let files = find_all_files(Path::new("notes"), FindOptions::markdown())?;
/// for file in files {
///     println!("{}", file.relative_path.display());
/// }
/// # Ok(())
/// # }
/// ```
pub fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let pattern = options.pattern_for(base_path)?;
    let entries = glob::glob_with(&pattern, match_options())
        .map_err(|e| Error::pattern(format!("{pattern}: {e}")))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                log::debug!("Skipping unreadable entry {}: {}", e.path().display(), e.error());
                continue;
            }
        };

        // Skip directories
        if !path.is_file() {
            continue;
        }

        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unknown".to_string());

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();
        if in_symlinked_dir(base_path, &relative_path) {
            log::debug!("Skipping {} (inside a symlinked directory)", relative_path.display());
            continue;
        }

        files.push(FileInfo {
            path,
            stem,
            relative_path,
        });
    }

    Ok(files)
}

/// True when any directory between `base_path` and the file at `relative`
/// is a symbolic link.
fn in_symlinked_dir(base_path: &Path, relative: &Path) -> bool {
    relative
        .ancestors()
        .skip(1)
        .filter(|dir| !dir.as_os_str().is_empty())
        .any(|dir| {
            base_path
                .join(dir)
                .symlink_metadata()
                .is_ok_and(|meta| meta.file_type().is_symlink())
        })
}

/// Read a file's contents as a UTF-8 string.
///
/// Fails with [`Error::IoWithPath`] when the file cannot be opened or is not
/// valid UTF-8.
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))
}

/// Write `contents` to `path`, creating parent directories first.
///
/// An existing file is overwritten.
pub fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
        }
    }
    std::fs::write(path, contents).map_err(|e| Error::io_with_path(e, path))
}

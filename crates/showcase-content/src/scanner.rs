//! Source tree scanning.
//!
//! Walks a directory of notes and keeps the markdown files whose frontmatter
//! mentions the presentable marker. Aggregation is best effort: a file that
//! cannot be opened or is not UTF-8 is skipped without failing the run.

use std::path::{Path, PathBuf};

use regex::Regex;
use showcase_core::util::files::{FindOptions, find_all_files, read_file};
use showcase_core::{Error, Result};

use crate::extractor::{ExtractedSection, extract_sections};
use crate::frontmatter::Frontmatter;
use crate::options::ContentOptions;

/// Decides whether a note's frontmatter marks it as presentable.
#[derive(Debug, Clone)]
pub struct PresentableMatcher {
    regex: Regex,
}

impl PresentableMatcher {
    /// Build a matcher for `token`, compared case-insensitively as a whole word.
    pub fn new(token: &str) -> Result<Self> {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(token.trim()));
        let regex = Regex::new(&pattern).map_err(|e| Error::pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    /// True when `frontmatter`'s raw block contains the token.
    pub fn matches(&self, frontmatter: &Frontmatter) -> bool {
        self.regex.is_match(frontmatter.raw())
    }

    /// True when `text` opens with a closed frontmatter block containing the
    /// token. Text without frontmatter never qualifies.
    pub fn is_presentable(&self, text: &str) -> bool {
        match Frontmatter::split(text) {
            (Some(fm), _) => self.matches(&fm),
            (None, _) => false,
        }
    }
}

/// A qualifying note, read once and kept in memory for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentableFile {
    pub path: PathBuf,
    /// File name without directory or extension.
    pub title: String,
    pub text: String,
}

impl PresentableFile {
    /// Extract this note's presentation sections.
    pub fn sections(&self, options: &ContentOptions) -> Vec<ExtractedSection> {
        extract_sections(&self.title, &self.text, options)
    }
}

/// Find every presentable markdown file under `root`, in alphabetical path
/// order.
pub fn find_presentable_files(
    root: &Path,
    matcher: &PresentableMatcher,
) -> Result<Vec<PresentableFile>> {
    let candidates = find_all_files(root, FindOptions::markdown())?;
    log::debug!(
        "Found {} markdown files under {}",
        candidates.len(),
        root.display()
    );

    let mut files = Vec::new();
    for info in candidates {
        let text = match read_file(&info.path) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("Skipping {}: {}", info.path.display(), e);
                continue;
            }
        };

        if matcher.is_presentable(&text) {
            files.push(PresentableFile {
                path: info.path,
                title: info.stem,
                text,
            });
        }
    }
    Ok(files)
}

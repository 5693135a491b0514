//! Marker names and rendering knobs shared by the pipeline stages.

use showcase_core::{Error, Result};

use crate::headings::MAX_HEADING_LEVEL;

/// Options that drive scanning, extraction, and rendering.
///
/// The defaults reproduce the stock behaviour: notes whose frontmatter says
/// `presentable`, `# Presentation` blocks, `Description` narrowing, links
/// taken from the `github` key, and `###` entry titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentOptions {
    /// Word that marks a note as presentable when it appears in the
    /// frontmatter block, matched case-insensitively.
    pub presentable_token: String,
    /// Heading text that starts a presentation block.
    pub section_label: String,
    /// Heading text of the sub-block kept in description-only mode.
    pub description_label: String,
    /// Frontmatter key holding the URL an entry title links to.
    pub link_key: String,
    /// Heading level of each entry title in the output.
    pub title_level: usize,
    /// Fixed heading shift. `None` shifts each block so that its marker
    /// heading level lines up with `title_level`.
    pub heading_shift: Option<usize>,
    /// Keep only the description sub-block of each presentation block.
    pub description_only: bool,
}

impl Default for ContentOptions {
    fn default() -> Self {
        Self {
            presentable_token: "presentable".to_string(),
            section_label: "Presentation".to_string(),
            description_label: "Description".to_string(),
            link_key: "github".to_string(),
            title_level: 3,
            heading_shift: None,
            description_only: false,
        }
    }
}

impl ContentOptions {
    /// Toggle description-only extraction.
    pub fn with_description_only(mut self, description_only: bool) -> Self {
        self.description_only = description_only;
        self
    }

    /// Use a fixed heading shift for every block.
    pub fn with_heading_shift(mut self, shift: usize) -> Self {
        self.heading_shift = Some(shift);
        self
    }

    /// Shift to apply to a block whose marker heading sits at `marker_level`.
    pub fn shift_for(&self, marker_level: usize) -> usize {
        self.heading_shift
            .unwrap_or_else(|| self.title_level.saturating_sub(marker_level))
    }

    /// Check that the options describe something the pipeline can run.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_HEADING_LEVEL).contains(&self.title_level) {
            return Err(Error::config(format!(
                "title level must be between 1 and {}, got {}",
                MAX_HEADING_LEVEL, self.title_level
            )));
        }
        for (name, value) in [
            ("presentable token", &self.presentable_token),
            ("section label", &self.section_label),
            ("description label", &self.description_label),
            ("link key", &self.link_key),
        ] {
            if value.trim().is_empty() {
                return Err(Error::config(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

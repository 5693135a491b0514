//! Configuration for the `showcase` binary.
//!
//! Settings come from an optional `showcase.toml` that sits beside the
//! template, layered over built-in defaults with the `confyg` crate. There are
//! no configuration flags or environment variables.

use std::path::Path;

use confyg::Confygery;
use serde::{Deserialize, Serialize};
use showcase_content::ContentOptions;
use showcase_core::{Error, Result};

/// File name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "showcase.toml";

// ============================================================================
// Configuration structs
// ============================================================================

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Names the pipeline looks for in notes.
    pub markers: MarkerConfig,

    /// How entries are rendered.
    pub output: OutputConfig,
}

/// Marker names searched for in frontmatter and headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerConfig {
    /// Frontmatter word that opts a note in.
    pub presentable_token: String,

    /// Heading that starts a presentation section.
    pub section: String,

    /// Sub-heading kept by `--description-only`.
    pub description: String,

    /// Frontmatter key with the link for an entry's title.
    pub link_key: String,
}

/// Output rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Heading level of entry titles (1-6).
    pub title_level: usize,

    /// Fixed heading shift; computed per section when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading_shift: Option<usize>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for MarkerConfig {
    fn default() -> Self {
        let options = ContentOptions::default();
        Self {
            presentable_token: options.presentable_token,
            section: options.section_label,
            description: options.description_label,
            link_key: options.link_key,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        let options = ContentOptions::default();
        Self {
            title_level: options.title_level,
            heading_shift: options.heading_shift,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl ShowcaseConfig {
    /// Load `showcase.toml` from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        Self::load(&dir.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from `path` over the defaults.
    ///
    /// A missing file yields the defaults. A file that cannot be parsed, or
    /// whose values are out of range, is a configuration error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::debug!("No config at {}; using defaults", path.display());
            return Ok(Self::default());
        }

        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;
        builder
            .add_file(&path.to_string_lossy())
            .map_err(|e| Error::config(format!("config file {}: {e}", path.display())))?;

        let config: Self = builder
            .build()
            .map_err(|e| Error::config(format!("config build {}: {e}", path.display())))?;

        config.content_options(false).validate()?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Pipeline options for this configuration.
    pub fn content_options(&self, description_only: bool) -> ContentOptions {
        ContentOptions {
            presentable_token: self.markers.presentable_token.clone(),
            section_label: self.markers.section.clone(),
            description_label: self.markers.description.clone(),
            link_key: self.markers.link_key.clone(),
            title_level: self.output.title_level,
            heading_shift: self.output.heading_shift,
            description_only,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

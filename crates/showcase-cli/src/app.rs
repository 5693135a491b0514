//! The `showcase` application.
//!
//! Resolves the resources that ship with the binary, turns parsed
//! arguments into a [`GenerateRequest`], and prints the one-line summary.

use std::path::{Path, PathBuf};

use showcase_content::{GenerateRequest, Report, generate};
use showcase_core::Result;
use showcase_core::util::paths::resource_dir;
use tracing_subscriber::EnvFilter;

use crate::cli::CliArgs;
use crate::config::ShowcaseConfig;

/// File name of the template prepended to every README.
pub const TEMPLATE_FILE_NAME: &str = "Template.md";

/// Initialise tracing-based logging on stderr.
///
/// Uses `RUST_LOG` if set, otherwise `default_level`. Standard output stays
/// free for the run summary.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

// ============================================================================
// ShowcaseCli
// ============================================================================

/// A configured `showcase` run: template location plus loaded settings.
#[derive(Debug, Clone)]
pub struct ShowcaseCli {
    template_path: PathBuf,
    config: ShowcaseConfig,
}

impl ShowcaseCli {
    /// Locate `Template.md` next to the running binary (or in a parent
    /// directory) and load `showcase.toml` from the same place.
    pub fn from_install_dir() -> Result<Self> {
        let dir = resource_dir(TEMPLATE_FILE_NAME)?;
        tracing::debug!(dir = %dir.display(), "resolved resource directory");
        Self::from_resource_dir(&dir)
    }

    /// Use the template and optional config found in `dir`.
    pub fn from_resource_dir(dir: &Path) -> Result<Self> {
        let config = ShowcaseConfig::load_from_dir(dir)?;
        Ok(Self::new(dir.join(TEMPLATE_FILE_NAME), config))
    }

    pub fn new(template_path: impl Into<PathBuf>, config: ShowcaseConfig) -> Self {
        Self {
            template_path: template_path.into(),
            config,
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    /// Build the generation request for `args`.
    pub fn request(&self, args: &CliArgs) -> GenerateRequest {
        GenerateRequest {
            source: args.source_dir(),
            destination: args.destination_dir(),
            template: self.template_path.clone(),
            options: self.config.content_options(args.description_only),
        }
    }

    /// Generate the README and print the summary line.
    pub fn run(&self, args: &CliArgs) -> Result<Report> {
        let request = self.request(args);
        tracing::info!(
            source = %request.source.display(),
            destination = %request.destination.display(),
            description_only = args.description_only,
            "generating README"
        );

        let report = generate(&request)?;
        println!("{report}");
        Ok(report)
    }
}

// ============================================================================
// Tests
// ============================================================================

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;
use showcase_core::util::paths::expand_tilde;

/// Build a README from the presentable notes in a directory tree.
#[derive(Parser, Debug)]
#[command(name = "showcase", author, about, long_about = None)]
pub struct CliArgs {
    /// Directory of markdown notes to scan.
    #[arg(long)]
    pub source: PathBuf,

    /// Directory to write README.md into.
    #[arg(long)]
    pub destination: PathBuf,

    /// Keep only the Description part of each presentation section.
    #[arg(long)]
    pub description_only: bool,
}

impl CliArgs {
    /// Source directory with a leading `~` expanded.
    pub fn source_dir(&self) -> PathBuf {
        expand_tilde(&self.source)
    }

    /// Destination directory with a leading `~` expanded.
    pub fn destination_dir(&self) -> PathBuf {
        expand_tilde(&self.destination)
    }
}

//! Command-line front end for Showcase.
//!
//! - [`cli`]: clap argument definitions
//! - [`config`]: `showcase.toml` loading
//! - [`app`]: logging setup, resource lookup, and the run itself

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;

pub use app::{ShowcaseCli, init_logging};
pub use cli::CliArgs;
pub use config::ShowcaseConfig;

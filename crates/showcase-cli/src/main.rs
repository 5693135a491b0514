//! `showcase` — build a README from the presentable notes in a directory tree.

use anyhow::Context;
use clap::Parser;
use showcase_cli::{CliArgs, ShowcaseCli, init_logging};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging("warn");

    let cli = ShowcaseCli::from_install_dir().context("could not load showcase resources")?;
    cli.run(&args).with_context(|| {
        format!(
            "failed to generate README from {} into {}",
            args.source.display(),
            args.destination.display()
        )
    })?;
    Ok(())
}

//! README assembly.
//!
//! Output layout: the template verbatim, a blank line, then one entry per
//! section:
//!
//! ```text
//! ### [title](url)
//!
//! section text
//!
//! ---
//!
//! ```

use std::path::{Path, PathBuf};

use showcase_core::Result;
use showcase_core::util::files::{read_file, write_file};

use crate::extractor::ExtractedSection;

/// Name of the generated file inside the destination directory.
pub const README_FILE_NAME: &str = "README.md";

/// Horizontal rule written after every entry.
pub const RULE: &str = "---";

/// Title line of an entry, linked when the section carries a URL.
pub fn render_title(section: &ExtractedSection, level: usize) -> String {
    let hashes = "#".repeat(level);
    match section.url.as_deref() {
        Some(url) => format!("{} [{}]({})", hashes, section.title, url),
        None => format!("{} {}", hashes, section.title),
    }
}

/// Render one entry, rule included.
pub fn render_entry(section: &ExtractedSection, title_level: usize) -> String {
    format!(
        "{}\n\n{}\n\n{}\n\n",
        render_title(section, title_level),
        section.text,
        RULE
    )
}

/// Append the rendered sections to `template`.
pub fn assemble(template: &str, sections: &[ExtractedSection], title_level: usize) -> String {
    let mut out = String::with_capacity(template.len() + 2);
    out.push_str(template);
    out.push_str("\n\n");
    for section in sections {
        out.push_str(&render_entry(section, title_level));
    }
    out
}

/// Read the template, assemble the README, and write it to
/// `destination/README.md`, returning the written path.
///
/// The template is read before anything touches the destination, so a
/// missing template leaves no output behind. The destination directory is
/// created when needed and an existing README is replaced.
pub fn write_readme(
    template_path: &Path,
    destination: &Path,
    sections: &[ExtractedSection],
    title_level: usize,
) -> Result<PathBuf> {
    let template = read_file(template_path)?;
    let readme_path = destination.join(README_FILE_NAME);
    write_file(&readme_path, &assemble(&template, sections, title_level))?;
    log::info!(
        "Wrote {} sections to {}",
        sections.len(),
        readme_path.display()
    );
    Ok(readme_path)
}

//! End-to-end README generation.

use std::fmt;
use std::path::PathBuf;

use showcase_core::Result;

use crate::assembler::write_readme;
use crate::extractor::ExtractedSection;
use crate::options::ContentOptions;
use crate::scanner::{PresentableMatcher, find_presentable_files};

/// Everything one generation run needs.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Directory tree of notes to scan.
    pub source: PathBuf,
    /// Directory that receives `README.md`.
    pub destination: PathBuf,
    /// Template prepended to the output.
    pub template: PathBuf,
    pub options: ContentOptions,
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub readme_path: PathBuf,
    pub section_count: usize,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generated README at {} from {} sections.",
            self.readme_path.display(),
            self.section_count
        )
    }
}

/// Scan, extract, shift, assemble, and write in one pass.
///
/// Unreadable notes are skipped. A missing template or an unwritable
/// destination ends the run with an error.
pub fn generate(request: &GenerateRequest) -> Result<Report> {
    let options = &request.options;
    options.validate()?;

    let matcher = PresentableMatcher::new(&options.presentable_token)?;
    let files = find_presentable_files(&request.source, &matcher)?;
    log::info!(
        "{} presentable notes under {}",
        files.len(),
        request.source.display()
    );

    let sections: Vec<ExtractedSection> = files
        .iter()
        .flat_map(|file| file.sections(options))
        .map(|section| {
            let shift = options.shift_for(section.level);
            section.shifted(shift)
        })
        .collect();

    let readme_path = write_readme(
        &request.template,
        &request.destination,
        &sections,
        options.title_level,
    )?;

    Ok(Report {
        readme_path,
        section_count: sections.len(),
    })
}

//! Markdown processing for Showcase.
//!
//! The pipeline runs in a single synchronous pass:
//!
//! 1. [`scanner`] walks the source tree and keeps presentable notes
//! 2. [`frontmatter`] reads the `key: value` metadata block of each note
//! 3. [`extractor`] pulls out the presentation blocks
//! 4. [`headings`] shifts their headings under the output's title level
//! 5. [`assembler`] appends everything to the template and writes the README
//!
//! [`generate`] chains the steps.

#![doc = include_str!("../README.md")]

pub mod assembler;
pub mod extractor;
pub mod frontmatter;
pub mod generate;
pub mod headings;
pub mod options;
pub mod scanner;

pub use assembler::{README_FILE_NAME, assemble, write_readme};
pub use extractor::{ExtractedSection, HeadingBlock, extract_sections};
pub use frontmatter::Frontmatter;
pub use generate::{GenerateRequest, Report, generate};
pub use headings::shift_headings;
pub use options::ContentOptions;
pub use scanner::{PresentableFile, PresentableMatcher, find_presentable_files};

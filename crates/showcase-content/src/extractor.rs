//! Presentation block extraction.
//!
//! A block starts at a heading whose text matches a label and runs until the
//! next heading of the same or a lower level number, or the end of the text.
//! Blocks are found by scanning lines once and tracking the open heading's
//! level; there is no heading tree.

use crate::frontmatter::Frontmatter;
use crate::headings::{parse_heading, shift_headings};
use crate::options::ContentOptions;

/// A labelled heading and the text under it, borrowed from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingBlock<'a> {
    /// Level of the heading that opened the block.
    pub level: usize,
    /// Heading text, trimmed.
    pub heading: &'a str,
    /// Everything after the heading line up to the end of the block.
    pub body: &'a str,
}

impl<'a> HeadingBlock<'a> {
    /// The first `label` sub-block inside this block, if there is one.
    pub fn narrow(&self, label: &str) -> Option<HeadingBlock<'a>> {
        find_blocks(self.body, label).into_iter().next()
    }
}

/// Find every block in `text` opened by a heading labelled `label`.
///
/// Blocks never overlap: scanning resumes where the previous block ended, so
/// a labelled heading nested inside an open block belongs to that block.
pub fn find_blocks<'a>(text: &'a str, label: &str) -> Vec<HeadingBlock<'a>> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        lines.push((offset, line));
        offset += line.len();
    }

    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let (start, line) = lines[i];
        let Some(open) = parse_heading(line).filter(|h| h.is_labelled(label)) else {
            i += 1;
            continue;
        };

        let mut end = i + 1;
        while end < lines.len()
            && !parse_heading(lines[end].1).is_some_and(|next| next.level <= open.level)
        {
            end += 1;
        }

        let body_start = start + line.len();
        let body_end = lines.get(end).map_or(text.len(), |(s, _)| *s);
        blocks.push(HeadingBlock {
            level: open.level,
            heading: open.text,
            body: &text[body_start..body_end],
        });
        i = end;
    }
    blocks
}

/// One entry of the generated README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSection {
    /// File name of the source note without directory or extension.
    pub title: String,
    /// Link target for the title, from the note's frontmatter.
    pub url: Option<String>,
    /// Level of the heading the text was taken from.
    pub level: usize,
    /// Block text, trimmed.
    pub text: String,
}

impl ExtractedSection {
    /// Return the section with its headings pushed down by `shift` levels.
    pub fn shifted(self, shift: usize) -> Self {
        Self {
            text: shift_headings(&self.text, shift),
            ..self
        }
    }
}

/// Extract the presentation sections of one note.
///
/// `title` names the note in the output; `text` is its full contents. Each
/// `options.section_label` block yields one section, in document order. In
/// description-only mode a block is narrowed to its
/// `options.description_label` sub-block when it has one.
pub fn extract_sections(
    title: &str,
    text: &str,
    options: &ContentOptions,
) -> Vec<ExtractedSection> {
    let (frontmatter, body) = Frontmatter::split(text);
    let url = frontmatter
        .as_ref()
        .and_then(|fm| fm.get(&options.link_key))
        .filter(|url| !url.is_empty())
        .map(str::to_string);

    find_blocks(body, &options.section_label)
        .into_iter()
        .map(|block| {
            let kept = if options.description_only {
                block.narrow(&options.description_label).unwrap_or(block)
            } else {
                block
            };
            ExtractedSection {
                title: title.to_string(),
                url: url.clone(),
                level: kept.level,
                text: kept.body.trim().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTE: &str = "\
---
presentable: true
github: https://x/y
---
# Presentation
Hello
# Other
Ignored
";

    #[test]
    fn test_find_blocks_stops_at_same_level() {
        let blocks = find_blocks("# Presentation\nHello\n# Other\nIgnored\n", "presentation");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].level, 1);
        assert_eq!(blocks[0].heading, "Presentation");
        assert_eq!(blocks[0].body, "Hello\n");
    }

    #[test]
    fn test_find_blocks_stops_at_higher_level() {
        let text = "# Project\n## Presentation\nText\n### Detail\nMore\n# Next\nGone\n";
        let blocks = find_blocks(text, "Presentation");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "Text\n### Detail\nMore\n");
    }

    #[test]
    fn test_find_blocks_runs_to_end_of_text() {
        let blocks = find_blocks("intro\n## presentation\nlast line", "Presentation");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].body, "last line");
    }

    #[test]
    fn test_find_blocks_multiple() {
        let text = "# Presentation\nFirst\n# Notes\nx\n# PRESENTATION\nSecond\n";
        let bodies: Vec<_> = find_blocks(text, "Presentation")
            .iter()
            .map(|b| b.body.trim())
            .collect();
        assert_eq!(bodies, vec!["First", "Second"]);
    }

    #[test]
    fn test_find_blocks_adjacent_same_label() {
        let text = "# Presentation\nOne\n# Presentation\nTwo\n";
        assert_eq!(find_blocks(text, "Presentation").len(), 2);
    }

    #[test]
    fn test_find_blocks_requires_exact_label() {
        let text = "# Presentation notes\nx\n# Presentations\ny\n#Presentation\nz\n";
        assert!(find_blocks(text, "Presentation").is_empty());
    }

    #[test]
    fn test_narrow_between_sub_headings() {
        let text = "# Presentation\nIntro\n## Description\n  The part we want.  \n## Stack\nRust\n";
        let block = find_blocks(text, "Presentation")[0];
        let narrowed = block.narrow("Description").unwrap();
        assert_eq!(narrowed.level, 2);
        assert_eq!(narrowed.body.trim(), "The part we want.");
    }

    #[test]
    fn test_narrow_keeps_deeper_headings() {
        let text = "# Presentation\n## Description\nA\n### Detail\nB\n## Stack\nC\n";
        let block = find_blocks(text, "Presentation")[0];
        let narrowed = block.narrow("description").unwrap();
        assert_eq!(narrowed.body, "A\n### Detail\nB\n");
    }

    #[test]
    fn test_narrow_missing_label() {
        let block = find_blocks("# Presentation\nNo description here\n", "Presentation")[0];
        assert!(block.narrow("Description").is_none());
    }

    #[test]
    fn test_extract_sections_scenario() {
        let sections = extract_sections("a", NOTE, &ContentOptions::default());
        assert_eq!(
            sections,
            vec![ExtractedSection {
                title: "a".to_string(),
                url: Some("https://x/y".to_string()),
                level: 1,
                text: "Hello".to_string(),
            }]
        );
    }

    #[test]
    fn test_extract_sections_without_link() {
        let text = "---\npresentable: yes\n---\n# Presentation\nBody\n";
        let sections = extract_sections("note", text, &ContentOptions::default());
        assert_eq!(sections.len(), 1);
        assert!(sections[0].url.is_none());
    }

    #[test]
    fn test_extract_sections_empty_link_ignored() {
        let text = "---\npresentable: yes\ngithub:\n---\n# Presentation\nBody\n";
        let sections = extract_sections("note", text, &ContentOptions::default());
        assert!(sections[0].url.is_none());
    }

    #[test]
    fn test_extract_sections_description_only() {
        let text = "---\npresentable: true\n---\n# Presentation\nIntro\n## Description\nShort pitch\n## Stack\nRust\n";
        let options = ContentOptions::default().with_description_only(true);
        let sections = extract_sections("p", text, &options);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].text, "Short pitch");
        assert_eq!(sections[0].level, 2);
    }

    #[test]
    fn test_extract_sections_description_only_falls_back() {
        let text = "---\npresentable: true\n---\n# Presentation\nWhole block\n## Stack\nRust\n";
        let options = ContentOptions::default().with_description_only(true);
        let sections = extract_sections("p", text, &options);
        assert_eq!(sections[0].text, "Whole block\n## Stack\nRust");
        assert_eq!(sections[0].level, 1);
    }

    #[test]
    fn test_extract_sections_ignores_frontmatter_lines() {
        let text = "---\npresentable: true\n# Presentation: in yaml comment\n---\nbody only\n";
        assert!(extract_sections("p", text, &ContentOptions::default()).is_empty());
    }

    #[test]
    fn test_shifted_section() {
        let section = ExtractedSection {
            title: "t".to_string(),
            url: None,
            level: 1,
            text: "Intro\n## Details\ntext".to_string(),
        };
        assert_eq!(section.shifted(2).text, "Intro\n#### Details\ntext");
    }
}

//! ATX heading detection and level shifting.

/// Deepest heading level markdown supports.
pub const MAX_HEADING_LEVEL: usize = 6;

/// A heading line: its level (number of leading `#`) and trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

impl Heading<'_> {
    /// Case-insensitive comparison of the heading text against `label`.
    pub fn is_labelled(&self, label: &str) -> bool {
        self.text.to_lowercase() == label.trim().to_lowercase()
    }
}

/// Parse `line` as a heading.
///
/// A heading is a run of one to six `#` at the very start of the line,
/// followed by whitespace or the end of the line. Longer runs and `#tags`
/// are plain text.
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let line = line.trim_end_matches(['\n', '\r']);
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if level == 0 || level > MAX_HEADING_LEVEL {
        return None;
    }

    let rest = &line[level..];
    match rest.chars().next() {
        None => Some(Heading { level, text: "" }),
        Some(c) if c.is_whitespace() => Some(Heading {
            level,
            text: rest.trim(),
        }),
        Some(_) => None,
    }
}

/// Push every heading in `text` down by `shift` levels, capped at
/// [`MAX_HEADING_LEVEL`].
///
/// Only the `#` run changes; the rest of each line, including its line
/// ending, is kept as is.
///
/// ```
/// use showcase_content::headings::shift_headings;
///
/// assert_eq!(shift_headings("# Top\ntext\n##### Deep", 3), "#### Top\ntext\n###### Deep");
/// ```
pub fn shift_headings(text: &str, shift: usize) -> String {
    if shift == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + shift * 4);
    for line in text.split_inclusive('\n') {
        match parse_heading(line) {
            Some(heading) => {
                let level = (heading.level + shift).min(MAX_HEADING_LEVEL);
                out.push_str(&"#".repeat(level));
                out.push_str(&line[heading.level..]);
            }
            None => out.push_str(line),
        }
    }
    out
}

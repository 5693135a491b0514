//! Frontmatter extraction.
//!
//! A note may open with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! presentable: true
//! github: https://github.com/me/project
//! ---
//! ```
//!
//! Lines holding a colon become `key: value` pairs, split at the first colon
//! and trimmed. Everything else inside the block is ignored, and a block
//! without a closing fence counts as no block at all. Nothing here fails.

/// Line that opens and closes a frontmatter block.
pub const DELIMITER: &str = "---";

/// Parsed frontmatter: the raw block text plus its ordered key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    raw: String,
    entries: Vec<(String, String)>,
}

impl Frontmatter {
    /// Parse the frontmatter at the top of `text`.
    ///
    /// Returns an empty mapping when the document has no (closed) block.
    pub fn parse(text: &str) -> Self {
        Self::split(text).0.unwrap_or_default()
    }

    /// Split `text` into its frontmatter block and the body that follows.
    ///
    /// The block must start on the very first line. When there is no block,
    /// the whole text is the body.
    pub fn split(text: &str) -> (Option<Self>, &str) {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut lines = text.split_inclusive('\n');

        match lines.next() {
            Some(first) if is_delimiter(first) => {
                let block_start = first.len();
                let mut offset = block_start;
                for line in lines {
                    if is_delimiter(line) {
                        let fm = Self::from_block(&text[block_start..offset]);
                        return (Some(fm), &text[offset + line.len()..]);
                    }
                    offset += line.len();
                }
                log::debug!("frontmatter block is never closed; treating as body");
                (None, text)
            }
            _ => (None, text),
        }
    }

    /// Build a mapping from the lines between the two delimiters.
    fn from_block(raw: &str) -> Self {
        let mut fm = Self {
            raw: raw.to_string(),
            entries: Vec::new(),
        };
        for line in raw.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            fm.insert(key, value.trim());
        }
        fm
    }

    /// Insert or replace a value. A replaced key keeps its original position.
    fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The text between the two delimiter lines, verbatim.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Iterate over the pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

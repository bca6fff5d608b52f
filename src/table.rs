//! Per-block substitution tables.

use tracing::debug;

/// Number of codepoints covered by one block (`codepoint >> 8`).
pub const BLOCK_SIZE: usize = 256;

/// Substitutions for the 256 codepoints of one block.
///
/// Entry `i` holds the replacement for codepoint `(block << 8) | i`. An entry
/// is either a replacement string (possibly empty) or absent. Offsets past the
/// end of the table are absent as well, so a table built from a short file
/// behaves exactly like one padded with absent entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<Option<Box<str>>>,
}

impl SubstitutionTable {
    /// A table with every entry absent.
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses the line-delimited table format: line `i` is the substitution
    /// for offset `i`.
    ///
    /// Only the line terminator is stripped; a blank line is an explicit
    /// empty substitution. Lines beyond the 256th are ignored.
    pub fn from_lines(text: &str) -> Self {
        let mut entries: Vec<Option<Box<str>>> = Vec::with_capacity(BLOCK_SIZE);
        let mut extra = 0usize;
        for line in text.lines() {
            if entries.len() == BLOCK_SIZE {
                extra += 1;
                continue;
            }
            entries.push(Some(line.into()));
        }
        if extra > 0 {
            debug!(extra, "ignoring table rows past offset 0xff");
        }
        Self { entries }
    }

    /// Builds a table from already-resolved entries, keeping at most 256.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<Box<str>>,
    {
        let entries = entries
            .into_iter()
            .take(BLOCK_SIZE)
            .map(|e| e.map(Into::into))
            .collect();
        Self { entries }
    }

    /// Substitution for `offset`, or `None` when the entry is absent.
    #[inline]
    pub fn get(&self, offset: u8) -> Option<&str> {
        self.entries
            .get(usize::from(offset))
            .and_then(|e| e.as_deref())
    }

    /// Number of rows the table was built from (present or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of present entries.
    pub fn present(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

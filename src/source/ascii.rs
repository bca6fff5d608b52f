use std::io;

use deunicode::deunicode_char;

use super::TableSource;
use crate::table::{BLOCK_SIZE, SubstitutionTable};

/// Built-in US-ASCII tables, backed by the `deunicode` character table.
///
/// Multi-syllable scripts keep their trailing separator (`南` is `"Nan "`),
/// so consecutive ideographs come out space separated.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiSource;

/// ASCII substitution for a single codepoint, if one is known.
pub(crate) fn ascii_substitute(cp: u32) -> Option<&'static str> {
    char::from_u32(cp).and_then(deunicode_char)
}

impl TableSource for AsciiSource {
    fn name(&self) -> &str {
        "ascii"
    }

    fn load(&self, block: u8) -> io::Result<Option<SubstitutionTable>> {
        let base = u32::from(block) << 8;
        let entries: Vec<Option<&'static str>> = (0..BLOCK_SIZE as u32)
            .map(|offset| ascii_substitute(base | offset))
            .collect();
        if entries.iter().all(Option::is_none) {
            return Ok(None);
        }
        Ok(Some(SubstitutionTable::from_entries(entries)))
    }
}

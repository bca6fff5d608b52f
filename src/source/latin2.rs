use std::io;

use phf::phf_set;
use unicode_normalization::char::{compose, decompose_canonical};

use super::TableSource;
use super::ascii::ascii_substitute;
use crate::table::{BLOCK_SIZE, SubstitutionTable};

/// Upper half (0xA0..=0xFF) of ISO-8859-2, as Unicode characters.
static LATIN2_UPPER: phf::Set<char> = phf_set! {
    '\u{a0}', 'Ą', '˘', 'Ł', '¤', 'Ľ', 'Ś', '§', '¨', 'Š', 'Ş', 'Ť', 'Ź', '\u{ad}', 'Ž', 'Ż',
    '°', 'ą', '˛', 'ł', '´', 'ľ', 'ś', 'ˇ', '¸', 'š', 'ş', 'ť', 'ź', '˝', 'ž', 'ż',
    'Ŕ', 'Á', 'Â', 'Ă', 'Ä', 'Ĺ', 'Ć', 'Ç', 'Č', 'É', 'Ę', 'Ë', 'Ě', 'Í', 'Î', 'Ď',
    'Đ', 'Ń', 'Ň', 'Ó', 'Ô', 'Ő', 'Ö', '×', 'Ř', 'Ů', 'Ú', 'Ű', 'Ü', 'Ý', 'Ţ', 'ß',
    'ŕ', 'á', 'â', 'ă', 'ä', 'ĺ', 'ć', 'ç', 'č', 'é', 'ę', 'ë', 'ě', 'í', 'î', 'ď',
    'đ', 'ń', 'ň', 'ó', 'ô', 'ő', 'ö', '÷', 'ř', 'ů', 'ú', 'ű', 'ü', 'ý', 'ţ', '˙',
};

/// Blocks containing at least one ISO-8859-2 character.
const LATIN2_BLOCKS: [u8; 3] = [0x00, 0x01, 0x02];

/// Whether `c` is encodable in ISO-8859-2, C1 controls included.
pub fn is_latin2(c: char) -> bool {
    c.is_ascii() || ('\u{80}'..='\u{9f}').contains(&c) || LATIN2_UPPER.contains(&c)
}

/// Nearest Latin-2 character reachable by dropping trailing combining marks
/// from the canonical decomposition of `c` (`ǘ` -> `ü`, `ā` -> `a`).
fn nearest_latin2(c: char) -> Option<char> {
    let mut parts = Vec::with_capacity(4);
    decompose_canonical(c, |d| parts.push(d));
    let (&base, marks) = parts.split_first()?;
    if marks.is_empty() {
        return None;
    }
    (0..marks.len()).rev().find_map(|keep| {
        let composed = marks[..keep]
            .iter()
            .try_fold(base, |acc, &mark| compose(acc, mark))?;
        is_latin2(composed).then_some(composed)
    })
}

/// Built-in ISO-8859-2 tables.
///
/// Only blocks 0x00..=0x02 hold Latin-2 characters; every other block is left
/// to the next source of the profile. Within those blocks, characters outside
/// the repertoire fall back to their nearest Latin-2 form, then to ASCII.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin2Source;

impl TableSource for Latin2Source {
    fn name(&self) -> &str {
        "latin2"
    }

    fn load(&self, block: u8) -> io::Result<Option<SubstitutionTable>> {
        if !LATIN2_BLOCKS.contains(&block) {
            return Ok(None);
        }
        let base = u32::from(block) << 8;
        let entries = (0..BLOCK_SIZE as u32).map(|offset| {
            let cp = base | offset;
            let c = char::from_u32(cp)?;
            if is_latin2(c) {
                return Some(c.to_string());
            }
            nearest_latin2(c)
                .map(String::from)
                .or_else(|| ascii_substitute(cp).map(str::to_owned))
        });
        Ok(Some(SubstitutionTable::from_entries(entries)))
    }
}

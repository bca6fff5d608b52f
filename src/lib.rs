//! Transliteration of Unicode text into narrower charsets.
//!
//! Every BMP character outside ASCII is replaced with a "nearest" sequence
//! from the target repertoire, taken from a per-block substitution table.
//! Tables are loaded lazily, one 256-codepoint block at a time, and cached for
//! the lifetime of the engine.
//!
//! ```
//! use unidecode_charset::Unidecode;
//!
//! let ascii = Unidecode::to_ascii();
//! assert_eq!(ascii.decode("南无阿弥陀佛"), "Nan Wu A Mi Tuo Fo");
//! assert_eq!(ascii.to_initials("南无阿弥陀佛"), "NWAMTF");
//! ```

mod charset;
mod error;
pub mod source;
mod store;
mod table;

// Include Python bindings when building with the `python` feature.
#[cfg(feature = "python")]
mod lib_py;

use std::sync::LazyLock;

use regex::Regex;

pub use charset::{Charset, UnidecodeBuilder};
pub use error::Error;
pub use source::TableSource;
pub use store::TableStore;
pub use table::{BLOCK_SIZE, SubstitutionTable};

/// Placeholder for a character with no known substitution.
pub const UNKNOWN_CHAR: &str = "[?]";

/// First word character, and each word character that follows whitespace.
static INITIALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w|(?-u:\s)+\w").expect("initials pattern"));

/// What to emit for a character without a substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OnUnknown {
    /// Emit [`UNKNOWN_CHAR`].
    #[default]
    Sentinel,
    /// Emit nothing.
    Drop,
}

/// Transliterates Unicode strings into a target charset.
///
/// The engine is `Send + Sync`; share one instance between threads to share
/// its table cache. Engines never share state with each other.
#[derive(Debug)]
pub struct Unidecode {
    store: TableStore,
    on_unknown: OnUnknown,
}

impl Unidecode {
    pub fn new(charset: Charset) -> Self {
        Self::from_sources(charset.sources(), OnUnknown::default())
    }

    /// Engine for a charset given by name (`"ASCII"`, `"ISO-8859-2"`, `"LATIN-2"`).
    pub fn with_charset(name: &str) -> Result<Self, Error> {
        Ok(Self::new(name.parse()?))
    }

    /// Engine targeting US-ASCII.
    pub fn to_ascii() -> Self {
        Self::new(Charset::Ascii)
    }

    /// Engine targeting ISO-8859-2, falling back to ASCII tables.
    pub fn to_latin2() -> Self {
        Self::new(Charset::Latin2)
    }

    pub fn builder(charset: Charset) -> UnidecodeBuilder {
        UnidecodeBuilder::new(charset)
    }

    /// Engine over a custom profile; `sources` are consulted in order.
    pub fn from_sources(sources: Vec<Box<dyn TableSource>>, on_unknown: OnUnknown) -> Self {
        Self {
            store: TableStore::new(sources),
            on_unknown,
        }
    }

    pub fn on_unknown(&self) -> OnUnknown {
        self.on_unknown
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// Transliterates `input` into the target charset.
    ///
    /// ASCII characters pass through unchanged, characters above U+FFFF are
    /// dropped, everything else is looked up in its block table. Leading and
    /// trailing spaces and control characters are removed. `None` yields an
    /// empty string.
    pub fn decode<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        let Some(input) = input.into() else {
            return String::new();
        };
        // Fast path: pure ASCII is its own transliteration.
        if input.is_ascii() {
            return trim_edges(input).to_owned();
        }

        let mut out = String::with_capacity(input.len() * 2);
        let bytes = input.as_bytes();
        let mut i = 0usize;
        while i < bytes.len() {
            // Copy contiguous ASCII run.
            if bytes[i].is_ascii() {
                let start = i;
                i += 1;
                while i < bytes.len() && bytes[i].is_ascii() {
                    i += 1;
                }
                out.push_str(&input[start..i]);
                continue;
            }
            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();
            self.substitute(ch, &mut out);
        }
        trim_edges(&out).to_owned()
    }

    /// Initials of the transliterated text: its first word character and the
    /// first word character after each run of whitespace.
    ///
    /// Spaces between words are dropped; tabs and line breaks in front of a
    /// word character are kept.
    pub fn to_initials<'a>(&self, input: impl Into<Option<&'a str>>) -> String {
        let decoded = self.decode(input);
        INITIALS
            .find_iter(&decoded)
            .flat_map(|m| m.as_str().chars().filter(|&c| c != ' '))
            .collect()
    }

    fn substitute(&self, ch: char, out: &mut String) {
        let cp = u32::from(ch);
        // Characters beyond the BMP are ignored.
        if cp > 0xffff {
            return;
        }
        let table = self.store.resolve(cp >> 8);
        match table.get((cp & 0xff) as u8) {
            Some(s) => out.push_str(s),
            None => {
                if self.on_unknown == OnUnknown::Sentinel {
                    out.push_str(UNKNOWN_CHAR);
                }
            }
        }
    }
}

fn trim_edges(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

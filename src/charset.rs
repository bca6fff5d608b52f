//! Charset profiles and engine configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;
use crate::source::{AsciiSource, DirectorySource, Latin2Source, TableSource};
use crate::{OnUnknown, Unidecode};

/// Target repertoire of a [`Unidecode`] engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    /// US-ASCII.
    Ascii,
    /// ISO-8859-2 (Latin-2), falling back to ASCII outside Latin blocks.
    Latin2,
}

impl Charset {
    pub fn name(self) -> &'static str {
        match self {
            Charset::Ascii => "ASCII",
            Charset::Latin2 => "ISO-8859-2",
        }
    }

    /// Lookup sources of this profile, highest priority first.
    pub fn sources(self) -> Vec<Box<dyn TableSource>> {
        match self {
            Charset::Ascii => vec![Box::new(AsciiSource)],
            Charset::Latin2 => vec![Box::new(Latin2Source), Box::new(AsciiSource)],
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASCII" | "US-ASCII" => Ok(Charset::Ascii),
            "ISO-8859-2" | "ISO8859-2" | "LATIN-2" | "LATIN2" => Ok(Charset::Latin2),
            _ => Err(Error::UnsupportedCharset(s.to_owned())),
        }
    }
}

impl FromStr for OnUnknown {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentinel" | "replace" => Ok(OnUnknown::Sentinel),
            "drop" | "ignore" => Ok(OnUnknown::Drop),
            _ => Err(Error::UnsupportedPolicy(s.to_owned())),
        }
    }
}

/// Builder for [`Unidecode`] engines.
///
/// ```
/// use unidecode_charset::{Charset, OnUnknown, Unidecode};
///
/// let engine = Unidecode::builder(Charset::Ascii)
///     .on_unknown(OnUnknown::Drop)
///     .build();
/// assert_eq!(engine.decode("Κνωσός"), "Knosos");
/// ```
#[derive(Debug, Clone)]
pub struct UnidecodeBuilder {
    charset: Charset,
    on_unknown: OnUnknown,
    tables_dirs: Vec<PathBuf>,
}

impl UnidecodeBuilder {
    pub fn new(charset: Charset) -> Self {
        Self {
            charset,
            on_unknown: OnUnknown::default(),
            tables_dirs: Vec::new(),
        }
    }

    pub fn on_unknown(mut self, policy: OnUnknown) -> Self {
        self.on_unknown = policy;
        self
    }

    /// Adds a directory of `X%03x` table files consulted before the built-in
    /// tables. Directories are searched in the order they were added.
    pub fn tables_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.tables_dirs.push(dir.into());
        self
    }

    pub fn build(self) -> Unidecode {
        let mut sources: Vec<Box<dyn TableSource>> = self
            .tables_dirs
            .into_iter()
            .map(|dir| Box::new(DirectorySource::new(dir)) as Box<dyn TableSource>)
            .collect();
        sources.extend(self.charset.sources());
        Unidecode::from_sources(sources, self.on_unknown)
    }
}

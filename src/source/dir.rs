use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::TableSource;
use crate::table::SubstitutionTable;

/// Tables stored one file per block under a directory.
///
/// Files are named `X` followed by the block as three lowercase hex digits
/// (`X053` holds U+5300..U+53FF); line `i` of a file is the substitution for
/// offset `i`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    name: String,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let name = root.display().to_string();
        Self { root, name }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File name holding `block`, e.g. `X0a1`.
    pub fn file_name(block: u8) -> String {
        format!("X{block:03x}")
    }

    pub fn path_for(&self, block: u8) -> PathBuf {
        self.root.join(Self::file_name(block))
    }
}

impl TableSource for DirectorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self, block: u8) -> io::Result<Option<SubstitutionTable>> {
        match fs::read_to_string(self.path_for(block)) {
            Ok(text) => Ok(Some(SubstitutionTable::from_lines(&text))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

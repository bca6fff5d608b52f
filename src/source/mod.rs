//! Lookup sources: where substitution tables come from.
//!
//! A charset profile is an ordered list of sources. The store asks each one
//! in turn for a block and keeps the first table it gets.

mod ascii;
mod dir;
mod latin2;

pub use ascii::AsciiSource;
pub use dir::DirectorySource;
pub use latin2::Latin2Source;

use std::fmt;
use std::io;

use crate::table::SubstitutionTable;

/// Provider of per-block substitution tables.
pub trait TableSource: Send + Sync + fmt::Debug {
    /// Identifier used in diagnostics.
    fn name(&self) -> &str;

    /// Loads the table for `block`.
    ///
    /// `Ok(None)` means this source has no table for the block; `Err` means
    /// the table exists but could not be read.
    fn load(&self, block: u8) -> io::Result<Option<SubstitutionTable>>;
}

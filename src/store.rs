//! Lazily populated, per-instance block cache.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, info, trace, warn};

use crate::source::TableSource;
use crate::table::{BLOCK_SIZE, SubstitutionTable};

static NO_TABLE: SubstitutionTable = SubstitutionTable::empty();

/// Displays a block the way table files are named (`053`).
struct BlockId(u8);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03x}", self.0)
    }
}

/// Resolves and memoizes substitution tables for the 256 BMP blocks.
///
/// Each block has its own compute-once cell: the first caller loads the table
/// from the sources, concurrent callers for the same block wait for that load,
/// and every later call returns the same table. Entries are never evicted.
#[derive(Debug)]
pub struct TableStore {
    sources: Vec<Box<dyn TableSource>>,
    cache: Box<[OnceLock<SubstitutionTable>]>,
}

impl TableStore {
    /// Creates a store consulting `sources` in priority order.
    pub fn new(sources: Vec<Box<dyn TableSource>>) -> Self {
        let cache = (0..BLOCK_SIZE).map(|_| OnceLock::new()).collect();
        Self { sources, cache }
    }

    /// Table for `block`, loading it on first reference.
    ///
    /// Blocks outside `0..=0xff` get an all-absent table and are not cached.
    pub fn resolve(&self, block: u32) -> &SubstitutionTable {
        let slot = usize::try_from(block)
            .ok()
            .and_then(|index| self.cache.get(index));
        match slot {
            // The slot lookup above bounds `block` to 0..=255.
            Some(slot) => slot.get_or_init(|| self.load(block as u8)),
            None => {
                trace!(block, "block outside the cache range");
                &NO_TABLE
            }
        }
    }

    /// Whether `block` has already been resolved.
    pub fn is_cached(&self, block: u32) -> bool {
        usize::try_from(block)
            .ok()
            .and_then(|index| self.cache.get(index))
            .is_some_and(|slot| slot.get().is_some())
    }

    pub fn source_names(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|s| s.name())
    }

    fn load(&self, block: u8) -> SubstitutionTable {
        for source in &self.sources {
            match source.load(block) {
                Ok(Some(table)) => {
                    debug!(
                        source = source.name(),
                        block = %BlockId(block),
                        present = table.present(),
                        "loaded chars table"
                    );
                    return table;
                }
                Ok(None) => {}
                Err(error) => {
                    warn!(
                        source = source.name(),
                        block = %BlockId(block),
                        %error,
                        "failed to load chars table"
                    );
                }
            }
        }
        info!(block = %BlockId(block), "missing chars table");
        SubstitutionTable::empty()
    }
}

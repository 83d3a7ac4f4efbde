//! Cache Statistics Module
//!
//! Snapshot of how many entries each typed store holds.

use serde::Serialize;

// == Cache Stats ==
/// Entry counts per store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries in the string store
    pub strings: usize,
    /// Entries in the int store
    pub ints: usize,
    /// Entries in the float store
    pub floats: usize,
    /// Sum over all stores
    pub total_entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from per-store counts.
    pub fn new(strings: usize, ints: usize, floats: usize) -> Self {
        Self {
            strings,
            ints,
            floats,
            total_entries: strings + ints + floats,
        }
    }

    // == Is Empty ==
    /// Returns true if no store holds an entry.
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
    }
}

use super::*;
use std::sync::atomic::Ordering;

/// Getter methods for OpaqueRegistry
///
/// These expose table size and counters for debugging and monitoring.
/// Counters are loaded with relaxed ordering.
impl OpaqueRegistry {
    /// Number of entries, including ones whose wrapper already died
    pub fn len(&self) -> usize {
        self.table.lock().map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries whose wrapper is still alive
    pub fn live_count(&self) -> usize {
        self.table
            .lock()
            .map
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    /// Lookups that found a live wrapper
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that had to create or adopt a wrapper
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn sweeps(&self) -> u64 {
        self.sweeps.load(Ordering::Relaxed)
    }

    pub fn sweep_threshold(&self) -> usize {
        self.table.lock().sweep_threshold
    }
}

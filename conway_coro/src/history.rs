// history.rs - Recent grid fingerprints, used to stop a run that has settled into a cycle

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use conway::Grid;

pub const HISTORY_LEN: usize = 10;

pub fn fingerprint(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.dimensions().hash(&mut hasher);
    for (_, _, cell) in grid.cells() {
        cell.state().hash(&mut hasher);
    }
    hasher.finish()
}

/// Fixed ring of the last `HISTORY_LEN` fingerprints.
#[derive(Debug, Clone, Default)]
pub struct CycleHistory {
    hashes: [u64; HISTORY_LEN],
    count:  usize,
}

impl CycleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record `grid`; returns true if it matches one of the recorded states.
    pub fn check(&mut self, grid: &Grid) -> bool {
        let hash = fingerprint(grid);
        let seen = self.hashes[..self.count.min(HISTORY_LEN)].contains(&hash);
        if !seen {
            self.hashes[self.count % HISTORY_LEN] = hash;
            self.count += 1;
        }
        seen
    }
}

//! Pool occupancy snapshot

use std::fmt;

use serde::Serialize;

/// Pool statistics for debugging/profiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Nodes ever created
    pub len: usize,
    /// Nodes storage can hold without growing
    pub capacity: usize,
    /// Nodes on the free list
    pub free: usize,
    /// Nodes belonging to some stack
    pub live: usize,
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes: {} (live {}, free {}), capacity: {}",
            self.len, self.live, self.free, self.capacity
        )
    }
}

//! Pool configuration
//!
//! ```rust
//! use stack_pool::{PoolConfig, StackPool};
//!
//! let config = PoolConfig::default().with_capacity(64).with_strict_pop(true);
//! let pool: StackPool<i32> = StackPool::with_config(&config);
//! assert!(pool.capacity() >= 64);
//! ```

use serde::{Deserialize, Serialize};

/// Construction-time settings for a [`StackPool`](crate::StackPool)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of nodes to reserve up front
    pub initial_capacity: usize,

    /// Reject `pop` on an empty stack instead of treating it as a no-op.
    pub strict_pop: bool,
}

impl PoolConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_strict_pop(mut self, strict_pop: bool) -> Self {
        self.strict_pop = strict_pop;
        self
    }
}

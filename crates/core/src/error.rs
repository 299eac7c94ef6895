//! Pool error types.
//!
//! Every operation that takes a handle validates it before touching storage,
//! so an `Err` always means the pool was left exactly as it was.

use crate::handle::Handle;

/// Error type for handle misuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// `push` was given something other than the sentinel or a live node
    #[error("push: invalid stack index {handle}")]
    InvalidIndexOnPush { handle: Handle },

    /// `pop` was given an empty stack or a node already on the free list
    #[error("pop: invalid stack index {handle}")]
    InvalidIndexOnPop { handle: Handle },

    /// A node accessor was given the sentinel or a handle past the end of storage
    #[error("node access out of range: index {handle}, pool holds {len} nodes")]
    OutOfRangeAccess { handle: Handle, len: usize },
}

impl PoolError {
    /// The handle that caused the error
    pub fn handle(&self) -> Handle {
        match *self {
            PoolError::InvalidIndexOnPush { handle }
            | PoolError::InvalidIndexOnPop { handle }
            | PoolError::OutOfRangeAccess { handle, .. } => handle,
        }
    }
}

//! Stack Pool: many singly-linked stacks in one node arena
//!
//! A `StackPool<T>` owns a single growable array of nodes. Any number of
//! independent stacks live in it at once, each identified only by the
//! [`Handle`] of its top node. Popped and freed nodes go onto a free list
//! threaded through the same `next` links and are reused by later pushes,
//! so once storage has grown to its working size no push or pop allocates.
//!
//! ```rust
//! use stack_pool::StackPool;
//!
//! # fn main() -> Result<(), stack_pool::PoolError> {
//! let mut pool = StackPool::with_capacity(16);
//! let mut s = pool.new_stack();
//! for v in [3, 1, 4] {
//!     s = pool.push(v, s)?;
//! }
//! assert_eq!(pool.iter(s).copied().collect::<Vec<_>>(), vec![4, 1, 3]);
//!
//! s = pool.pop(s)?;
//! assert_eq!(pool.value(s)?, &1);
//!
//! s = pool.free_stack(s)?;
//! assert!(pool.empty(s));
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - `handle`: 1-based node handles with a built-in sentinel
//! - `pool`: storage, free list and stack operations
//! - `iter`: cursors and iterators over one stack
//! - `error`: handle validation errors
//! - `config`: construction settings (serde)
//! - `stats`: occupancy snapshot

pub mod config;
pub mod error;
pub mod handle;
pub mod iter;
mod node;
pub mod pool;
pub mod stats;

pub use config::PoolConfig;
pub use error::PoolError;
pub use handle::Handle;
pub use iter::{Cursor, Iter};
pub use pool::{StackDisplay, StackPool};
pub use stats::PoolStats;

//! Stack traversal
//!
//! Two ways to walk a stack:
//!
//! - [`Cursor`]: a detached position holding only a handle. It borrows the
//!   pool per call, so it stays valid while the pool grows underneath it.
//! - [`Iter`]: a borrowing `Iterator` over `&T`, for use with the standard
//!   adapters (`max`, `min`, `collect`, ...).
//!
//! Neither exposes `next` links for writing.

use std::iter::FusedIterator;

use crate::handle::Handle;
use crate::pool::StackPool;

/// Position within a stack.
///
/// Two cursors are equal when they hold the same handle, so every
/// exhausted cursor equals `pool.end(_)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    handle: Handle,
}

impl Cursor {
    pub(crate) fn new(handle: Handle) -> Self {
        Cursor { handle }
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    pub fn is_end(&self) -> bool {
        self.handle.is_empty()
    }

    /// Value under the cursor, `None` at the end
    pub fn get<'a, T>(&self, pool: &'a StackPool<T>) -> Option<&'a T> {
        pool.node_at(self.handle).map(|node| &node.value)
    }

    pub fn get_mut<'a, T>(&self, pool: &'a mut StackPool<T>) -> Option<&'a mut T> {
        pool.node_at_mut(self.handle).map(|node| &mut node.value)
    }

    /// Step to the node below. Advancing the end cursor leaves it at the end.
    pub fn advance<T>(&mut self, pool: &StackPool<T>) {
        self.handle = pool
            .node_at(self.handle)
            .map_or(Handle::EMPTY, |node| node.next);
    }
}

/// Iterator over the values of one stack, top first
///
/// Yields at most `pool.len()` items, so a link cycle introduced through
/// `next_mut` cannot make it run forever.
pub struct Iter<'a, T> {
    pool: &'a StackPool<T>,
    cursor: Handle,
    budget: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(pool: &'a StackPool<T>, top: Handle) -> Self {
        Iter {
            pool,
            cursor: top,
            budget: pool.len(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.budget == 0 {
            return None;
        }
        let node = self.pool.node_at(self.cursor)?;
        self.cursor = node.next;
        self.budget -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.budget > 0 && self.pool.node_at(self.cursor).is_some() {
            (1, Some(self.budget))
        } else {
            (0, Some(0))
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            pool: self.pool,
            cursor: self.cursor,
            budget: self.budget,
        }
    }
}

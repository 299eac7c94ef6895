//! Stack Pool - one node arena shared by many singly-linked stacks
//!
//! Instead of allocating a node per push and freeing it per pop, every
//! stack lives inside a single growable `Vec` of nodes. A stack is nothing
//! more than the handle of its top node; the bottom node links to the
//! sentinel.
//!
//! Design:
//! - Storage only grows; a node keeps its position for the pool's lifetime
//! - Free list threaded through the same `next` field, rooted at `free_head`
//! - `push` recycles the free-list head before appending (LIFO reuse)
//! - `free_stack` splices a whole chain onto the free list with one write
//!
//! Handle misuse is reported, never trusted:
//! - `push` accepts the sentinel or the top node of a live stack
//! - `pop` and `free_stack` accept the top node of a live stack (and the
//!   sentinel, as a no-op, unless the pool was built with `strict_pop`)
//!
//! A node deeper in some stack is live but not a top, so handing it to
//! `push` or `pop` is rejected rather than letting two stacks share nodes.
//! Each node carries a `top` flag, maintained in O(1) by every operation.
//! - accessors accept a handle in `1..=len`
//!
//! On error the pool is untouched.
//!
//! Exclusive access (`&mut self`) is required for every mutation; the pool
//! has no internal locking.

use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::PoolConfig;
use crate::error::PoolError;
use crate::handle::Handle;
use crate::iter::{Cursor, Iter};
use crate::node::Node;
use crate::stats::PoolStats;

/// Arena of stack nodes plus the free list of recycled ones
#[derive(Debug, Clone)]
pub struct StackPool<T> {
    /// Node storage; handle `h` lives at `nodes[h - 1]`
    nodes: Vec<Node<T>>,

    /// Head of the free list (sentinel when nothing has been freed)
    free_head: Handle,

    /// Treat `pop` of the empty stack as an error
    strict_pop: bool,
}

impl<T> Default for StackPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StackPool<T> {
    /// Create an empty pool with no reserved storage
    pub fn new() -> Self {
        StackPool {
            nodes: Vec::new(),
            free_head: Handle::EMPTY,
            strict_pop: false,
        }
    }

    /// Create an empty pool with room for `n` nodes
    pub fn with_capacity(n: usize) -> Self {
        StackPool {
            nodes: Vec::with_capacity(n),
            free_head: Handle::EMPTY,
            strict_pop: false,
        }
    }

    /// Create a pool from `config`: reserved capacity and `pop` strictness
    pub fn with_config(config: &PoolConfig) -> Self {
        let mut pool = Self::with_capacity(config.initial_capacity);
        pool.strict_pop = config.strict_pop;
        pool
    }

    /// Return an empty stack
    #[inline]
    pub fn new_stack(&self) -> Handle {
        Handle::EMPTY
    }

    /// Check if the stack is empty
    #[inline]
    pub fn empty(&self, x: Handle) -> bool {
        x.is_empty()
    }

    /// Number of nodes the storage can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Make room for at least `n` nodes in total. Never shrinks.
    pub fn reserve(&mut self, n: usize) {
        self.nodes.reserve(n.saturating_sub(self.nodes.len()));
    }

    /// Number of nodes ever created (live and free)
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if no node was ever created.
    ///
    /// This is about the pool's storage; use [`empty`](Self::empty) to ask
    /// whether a stack handle is the empty stack.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of nodes waiting on the free list
    pub fn free_len(&self) -> usize {
        self.iter(self.free_head).count()
    }

    /// Number of nodes in the stack rooted at `x`
    pub fn depth(&self, x: Handle) -> usize {
        self.iter(x).count()
    }

    pub fn stats(&self) -> PoolStats {
        let free = self.free_len();
        PoolStats {
            len: self.nodes.len(),
            capacity: self.nodes.capacity(),
            free,
            live: self.nodes.len() - free,
        }
    }

    // =========================================================================
    // Node access
    // =========================================================================

    /// Resolve a handle without validation (for iteration)
    #[inline]
    pub(crate) fn node_at(&self, x: Handle) -> Option<&Node<T>> {
        x.slot().and_then(|slot| self.nodes.get(slot))
    }

    #[inline]
    pub(crate) fn node_at_mut(&mut self, x: Handle) -> Option<&mut Node<T>> {
        x.slot().and_then(|slot| self.nodes.get_mut(slot))
    }

    fn node(&self, x: Handle) -> Result<&Node<T>, PoolError> {
        let len = self.nodes.len();
        self.node_at(x)
            .ok_or(PoolError::OutOfRangeAccess { handle: x, len })
    }

    fn node_mut(&mut self, x: Handle) -> Result<&mut Node<T>, PoolError> {
        let len = self.nodes.len();
        self.node_at_mut(x)
            .ok_or(PoolError::OutOfRangeAccess { handle: x, len })
    }

    /// Value stored at `x`
    pub fn value(&self, x: Handle) -> Result<&T, PoolError> {
        self.node(x).map(|node| &node.value)
    }

    pub fn value_mut(&mut self, x: Handle) -> Result<&mut T, PoolError> {
        self.node_mut(x).map(|node| &mut node.value)
    }

    /// Handle of the node below `x`
    pub fn next(&self, x: Handle) -> Result<Handle, PoolError> {
        self.node(x).map(|node| node.next)
    }

    /// Raw access to the link of `x`.
    ///
    /// Rewriting links can splice a node into two chains or close a cycle;
    /// the pool does not repair either.
    pub fn next_mut(&mut self, x: Handle) -> Result<&mut Handle, PoolError> {
        self.node_mut(x).map(|node| &mut node.next)
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn is_live(&self, x: Handle) -> bool {
        self.node_at(x).is_some_and(|node| node.live)
    }

    fn is_top(&self, x: Handle) -> bool {
        self.node_at(x).is_some_and(|node| node.live && node.top)
    }

    fn set_top(&mut self, x: Handle, top: bool) {
        if let Some(node) = self.node_at_mut(x) {
            node.top = top;
        }
    }

    fn check_push(&self, head: Handle) -> Result<(), PoolError> {
        if head.is_empty() || self.is_top(head) {
            return Ok(());
        }
        warn!(handle = head.raw(), len = self.nodes.len(), "push rejected");
        Err(PoolError::InvalidIndexOnPush { handle: head })
    }

    fn check_pop(&self, x: Handle) -> Result<(), PoolError> {
        if self.is_top(x) || (x.is_empty() && !self.strict_pop) {
            return Ok(());
        }
        warn!(handle = x.raw(), len = self.nodes.len(), "pop rejected");
        Err(PoolError::InvalidIndexOnPop { handle: x })
    }

    // =========================================================================
    // Stack operations
    // =========================================================================

    /// Push `value` on top of `head`, returning the new top.
    ///
    /// Reuses the most recently freed node if there is one, otherwise
    /// appends to storage.
    pub fn push(&mut self, value: T, head: Handle) -> Result<Handle, PoolError> {
        self.check_push(head)?;
        self.set_top(head, false);

        let recycled = self.free_head;
        if let Some(node) = self.node_at_mut(recycled) {
            let rest = node.next;
            node.value = value;
            node.next = head;
            node.live = true;
            node.top = true;
            self.free_head = rest;
            trace!(handle = recycled.raw(), "recycled node");
            return Ok(recycled);
        }

        if self.nodes.len() == self.nodes.capacity() {
            debug!(
                len = self.nodes.len(),
                capacity = self.nodes.capacity(),
                "node storage full, growing"
            );
        }
        self.nodes.push(Node::new(value, head));
        Ok(Handle::for_slot(self.nodes.len() - 1))
    }

    /// Remove the top node of `x`, returning the rest of the stack.
    ///
    /// The node goes to the front of the free list; its value stays in
    /// storage until the node is reused. Popping the empty stack returns the
    /// empty stack unless the pool is strict.
    pub fn pop(&mut self, x: Handle) -> Result<Handle, PoolError> {
        self.check_pop(x)?;
        if x.is_empty() {
            return Ok(x);
        }

        let rest = self.next(x)?;
        self.free_node(x);
        self.set_top(rest, true);
        Ok(rest)
    }

    /// Prepend a single node to the free list
    fn free_node(&mut self, x: Handle) {
        let free = self.free_head;
        if let Some(node) = self.node_at_mut(x) {
            node.next = free;
            node.live = false;
            node.top = false;
            self.free_head = x;
        }
    }

    /// Return every node of `x` to the free list, yielding the empty stack.
    ///
    /// The chain is walked once to find its tail, which is then linked to the
    /// current free list so the whole chain becomes the free list's prefix.
    pub fn free_stack(&mut self, x: Handle) -> Result<Handle, PoolError> {
        self.check_pop(x)?;
        if x.is_empty() {
            return Ok(x);
        }

        // Find the tail first; a chain that runs into a freed node or loops
        // back on itself is rejected before anything is written.
        let mut tail = x;
        let mut walked = 1;
        loop {
            let next = self.next(tail)?;
            if next.is_empty() {
                break;
            }
            if !self.is_live(next) || walked >= self.nodes.len() {
                warn!(handle = x.raw(), at = next.raw(), "free_stack: corrupt chain");
                return Err(PoolError::InvalidIndexOnPop { handle: next });
            }
            tail = next;
            walked += 1;
        }

        let mut cursor = x;
        while let Some(node) = self.node_at_mut(cursor) {
            node.live = false;
            node.top = false;
            cursor = node.next;
        }

        let free = self.free_head;
        *self.next_mut(tail)? = free;
        self.free_head = x;
        trace!(handle = x.raw(), nodes = walked, "freed stack");
        Ok(Handle::EMPTY)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Cursor at the top of `x`
    pub fn begin(&self, x: Handle) -> Cursor {
        Cursor::new(x)
    }

    /// The end cursor. Every stack shares it, so the argument is ignored.
    pub fn end(&self, _x: Handle) -> Cursor {
        Cursor::new(Handle::EMPTY)
    }

    /// Iterate the values of `x` from top to bottom
    pub fn iter(&self, x: Handle) -> Iter<'_, T> {
        Iter::new(self, x)
    }

    /// Visit every value of `x` from top to bottom with mutable access.
    pub fn for_each_mut<F>(&mut self, x: Handle, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut cursor = self.begin(x);
        let mut budget = self.nodes.len();
        while budget > 0 {
            match cursor.get_mut(self) {
                Some(value) => f(value),
                None => break,
            }
            cursor.advance(self);
            budget -= 1;
        }
    }

    /// Render `x` as space-separated values, top first
    pub fn display(&self, x: Handle) -> StackDisplay<'_, T> {
        StackDisplay { pool: self, top: x }
    }
}

/// `Display` adapter returned by [`StackPool::display`]
pub struct StackDisplay<'a, T> {
    pool: &'a StackPool<T>,
    top: Handle,
}

impl<T: fmt::Display> fmt::Display for StackDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.pool.iter(self.top).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

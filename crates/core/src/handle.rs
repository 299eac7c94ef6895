//! Stack handles
//!
//! A `Handle` names a node slot in a [`StackPool`](crate::StackPool). It is
//! also the only representation of a logical stack: a caller holding a
//! handle holds the top of a chain.
//!
//! Handles are 1-based. Raw value `0` is the sentinel, meaning "empty stack",
//! "end of chain" and "empty free list" at once. Internally the sentinel is
//! the `None` of an `Option<NonZeroUsize>`, so a `Handle` costs exactly one
//! `usize` and can never be confused with a real slot.

use std::fmt;
use std::num::NonZeroUsize;

#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(Option<NonZeroUsize>);

impl Handle {
    /// The sentinel: empty stack / chain terminator / empty free list
    pub const EMPTY: Handle = Handle(None);

    /// Build a handle from its raw integer form (`0` is the sentinel)
    #[inline]
    pub const fn from_raw(raw: usize) -> Self {
        Handle(NonZeroUsize::new(raw))
    }

    /// Raw integer form, `0` for the sentinel
    #[inline]
    pub const fn raw(self) -> usize {
        match self.0 {
            Some(n) => n.get(),
            None => 0,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// Storage position addressed by this handle (`h - 1`)
    #[inline]
    pub(crate) fn slot(self) -> Option<usize> {
        self.0.map(|n| n.get() - 1)
    }

    /// Handle for storage position `slot`
    #[inline]
    pub(crate) fn for_slot(slot: usize) -> Self {
        Handle(NonZeroUsize::new(slot + 1))
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "Handle({})", n),
            None => f.write_str("Handle(EMPTY)"),
        }
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

impl From<Handle> for usize {
    fn from(h: Handle) -> usize {
        h.raw()
    }
}

use crate::handle::Handle;

/// Node: one slot of pool storage
///
/// The `next` field threads the node into exactly one chain: either a
/// caller's stack or the pool's free list. `live` records which of the two,
/// so the guard layer can reject handles that point into the free list.
/// `top` marks the head of a live chain: a node has at most one
/// predecessor, so a live node with `top` unset is buried under another.
#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// The stored value. Stays in place after the node is freed and is
    /// overwritten when the node is recycled.
    pub(crate) value: T,

    /// Next node in the chain (or the sentinel at the bottom)
    pub(crate) next: Handle,

    /// False while the node sits on the free list
    pub(crate) live: bool,

    /// True while no live node links to this one
    pub(crate) top: bool,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, next: Handle) -> Self {
        Node {
            value,
            next,
            live: true,
            top: true,
        }
    }
}

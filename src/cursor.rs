use crate::node::{Handle, NodeStore};

/// The remembered position of the last index lookup.
///
/// A cursor never owns its node. It is only trusted while the store still resolves
/// `node`, and the list keeps `position` in sync with every edit in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCache {
    pub node: Handle,
    pub position: usize,
}

impl CursorCache {
    #[inline]
    pub const fn new(node: Handle, position: usize) -> Self {
        Self { node, position }
    }

    /// Resolves the node at `index`, starting from `cached` when it is live and not past
    /// `index`, or from `head` otherwise.
    ///
    /// The walk costs `index - cached.position` steps in the first case and `index` in the
    /// second, so increasing access patterns are amortized O(1) per step.
    ///
    /// # Panics
    /// Panics if the chain starting at `head` holds fewer than `index + 1` nodes.
    pub fn seek<T>(
        cached: Option<Self>,
        head: Handle,
        store: &NodeStore<T>,
        index: usize,
    ) -> Self {
        let Self {
            mut node,
            mut position,
        } = match cached {
            Some(cursor) if cursor.position <= index && store.contains(cursor.node) => cursor,
            _ => Self::new(head, 0),
        };

        while position < index {
            node = store[node].next.expect("chain is shorter than its length");
            position += 1;
        }

        Self::new(node, position)
    }
}

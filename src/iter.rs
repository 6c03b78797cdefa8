use core::iter::FusedIterator;

use crate::LinkedList;
use crate::element::ElementRef;
use crate::node::{Handle, NodeStore};

/// A borrowing iterator over the elements of a [`LinkedList`], front to back.
///
/// Returned by [`LinkedList::iter`] and by iterating over `&LinkedList`.
pub struct Iter<'a, T> {
    store: &'a NodeStore<T>,
    next: Option<Handle>,
    len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn from_list(list: &'a LinkedList<T>) -> Self {
        Self {
            store: &list.store,
            next: list.head,
            len: list.len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store,
            next: self.next,
            len: self.len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = ElementRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let store = self.store;
        let node = &store[self.next?];
        self.next = node.next;
        self.len -= 1;
        Some(node.element.borrow())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

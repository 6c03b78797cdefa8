use core::iter::FusedIterator;

use crate::LinkedList;
use crate::element::Element;

/// An owning iterator that drains a [`LinkedList`] from the front.
///
/// Returned by [`LinkedList::into_iter`](IntoIterator::into_iter). Each element keeps
/// its storage kind.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Default for IntoIter<T> {
    fn default() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> IntoIter<T> {
    pub(crate) fn from_list(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = Element<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.list.len()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.list).finish()
    }
}

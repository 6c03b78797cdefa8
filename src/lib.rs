//! # cursor_list
//!
//! `cursor_list` implements a **singly linked list** with index based access that stays cheap
//! for sequential access patterns, and whose elements may either be owned by the list or
//! shared with the caller.
//!
//! ## Features
//! - Ordered sequence with index based insertion, lookup, replacement and removal.
//! - A remembered cursor: every index lookup starts from the position of the previous one
//!   when possible, so walking the list by increasing index is amortized O(1) per step.
//! - Dual element storage: values pushed by value are owned by the list, values pushed as
//!   [`Shared`] handles stay owned by the caller and are only referenced by the list.
//! - Bulk removal by predicate and membership tests through pluggable [`Comparator`]s.
//!
//! ## Use Cases
//! `cursor_list` is a fit when:
//! - Elements are mostly visited in order but still addressed by index.
//! - Some elements must be observed and mutated both inside and outside the list.
//!
//! ## Note
//! The list is single threaded: it is neither `Send` nor `Sync`.
//!
//! ## Example
//! ```rust
//! use cursor_list::{LinkedList, ListError};
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//! list.insert(1, 9);
//!
//! assert_eq!(list, [1, 9, 2, 3]);
//!
//! list.remove(0)?;
//! assert_eq!(list.remove_where(|value| *value == 2), 1);
//! assert_eq!(list, [9, 3]);
//!
//! assert_eq!(
//!     list.get(5).err(),
//!     Some(ListError::IndexOutOfBound { index: 5, len: 2 })
//! );
//! # Ok::<(), ListError>(())
//! ```

mod comparator;
mod cursor;
mod element;
mod error;
mod into_iter;
mod iter;
mod node;

pub use comparator::{Comparator, DefaultComparator, Identity};
pub use element::{Element, ElementMut, ElementRef, Shared};
pub use error::{ListError, Result};
pub use into_iter::IntoIter;
pub use iter::Iter;

use std::cell::Cell;
use std::hash::{Hash, Hasher};

use crate::cursor::CursorCache;
use crate::node::{Handle, Node, NodeStore};

/// A singly linked list with a cursor cache for index based access.
///
/// # Storage
/// Every element is either **owned** (inserted by value, dropped with its node) or
/// **aliased** (inserted as a [`Shared`] handle, the caller keeps ownership and both sides
/// observe the same value). The storage kind is chosen by the method used to insert the
/// element: `push_back` / `push_back_shared`, `insert` / `insert_shared`, and so on.
///
/// # Index access
/// `get`, `get_mut`, `insert`, `replace` and `remove` walk the chain from the cached cursor
/// when the requested index is not before it, and from the head otherwise.
///
/// # Example
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use cursor_list::LinkedList;
///
/// let shared = Rc::new(RefCell::new(2));
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back_shared(Rc::clone(&shared));
///
/// *list.get_mut(1).unwrap() += 40;
/// assert_eq!(*shared.borrow(), 42);
///
/// *shared.borrow_mut() = 7;
/// assert_eq!(*list.get(1).unwrap(), 7);
/// ```
pub struct LinkedList<T> {
    store: NodeStore<T>,
    head: Option<Handle>,
    rear: Option<Handle>,
    len: usize,
    cursor: Cell<Option<CursorCache>>,
}

impl<T, const M: usize> From<[T; M]> for LinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_back(value));
    }
}

impl<'a, T> Extend<&'a T> for LinkedList<T>
where
    T: Clone + 'a,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let list: LinkedList<i64> = LinkedList::new();
    ///
    /// assert!(list.is_empty());
    /// ```
    pub const fn new() -> Self {
        Self {
            store: NodeStore::new(),
            head: None,
            rear: None,
            len: 0,
            cursor: Cell::new(None),
        }
    }

    /// Creates a new, empty `LinkedList` with room for at least `capacity` nodes before
    /// reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: NodeStore::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of nodes the list can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the number of elements currently stored in the `LinkedList`.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Checks if the `LinkedList` is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `value` to the back of the list, in O(1).
    ///
    /// The list owns the value: later changes to the caller's original have no effect on
    /// it and vice versa.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_back(10);
    /// list.push_back(20);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(*list.back().unwrap(), 20);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.link_back(Element::Owned(value));
    }

    /// Appends caller-owned storage to the back of the list, in O(1).
    ///
    /// The element aliases `shared`: mutations through the list are visible through the
    /// caller's handle and vice versa, and the list never frees the value.
    #[inline]
    pub fn push_back_shared(&mut self, shared: Shared<T>) {
        self.link_back(Element::Aliased(shared));
    }

    /// Prepends `value` to the list, in O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.link_at(0, Element::Owned(value));
    }

    /// Prepends caller-owned storage to the list, in O(1).
    #[inline]
    pub fn push_front_shared(&mut self, shared: Shared<T>) {
        self.link_at(0, Element::Aliased(shared));
    }

    /// Inserts `value` so that it ends up at `index`.
    ///
    /// An `index` past the end never fails: the value is appended instead.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([10, 30]);
    /// list.insert(1, 20);
    /// list.insert(0, 0);
    /// list.insert(99, 40);
    ///
    /// assert_eq!(list, [0, 10, 20, 30, 40]);
    /// ```
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) {
        self.link_at(index, Element::Owned(value));
    }

    /// Inserts caller-owned storage so that it ends up at `index`, clamping like
    /// [`insert`](Self::insert).
    #[inline]
    pub fn insert_shared(&mut self, index: usize, shared: Shared<T>) {
        self.link_at(index, Element::Aliased(shared));
    }

    /// Returns the element at `index`.
    ///
    /// The lookup moves the cursor, hence the interior mutability behind `&self`.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBound`] if `index >= self.len()`.
    ///
    /// # Panics
    /// Panics if the element is aliased and its storage is mutably borrowed elsewhere.
    pub fn get(&self, index: usize) -> Result<ElementRef<'_, T>> {
        self.check_index(index)?;
        let handle = self.seek(index);
        Ok(self.store[handle].element.borrow())
    }

    /// Returns the element at `index` for mutation.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBound`] if `index >= self.len()`.
    ///
    /// # Panics
    /// Panics if the element is aliased and its storage is borrowed elsewhere.
    pub fn get_mut(&mut self, index: usize) -> Result<ElementMut<'_, T>> {
        self.check_index(index)?;
        let handle = self.seek(index);
        Ok(self.store[handle].element.borrow_mut())
    }

    /// Returns the first element, if any.
    pub fn front(&self) -> Option<ElementRef<'_, T>> {
        self.head.map(|head| self.store[head].element.borrow())
    }

    /// Returns the last element, if any.
    pub fn back(&self) -> Option<ElementRef<'_, T>> {
        self.rear.map(|rear| self.store[rear].element.borrow())
    }

    /// Replaces the element at `index` with an owned `value`, returning the previous element
    /// whatever its storage kind.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBound`] if `index >= self.len()`; the list is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// let previous = list.replace(1, 20).unwrap();
    ///
    /// assert_eq!(previous.try_into_owned().ok(), Some(2));
    /// assert_eq!(list, [1, 20, 3]);
    /// ```
    #[inline]
    pub fn replace(&mut self, index: usize, value: T) -> Result<Element<T>> {
        self.swap_element(index, Element::Owned(value))
    }

    /// Replaces the element at `index` with caller-owned storage, returning the previous
    /// element whatever its storage kind.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBound`] if `index >= self.len()`; the list is left untouched.
    #[inline]
    pub fn replace_shared(&mut self, index: usize, shared: Shared<T>) -> Result<Element<T>> {
        self.swap_element(index, Element::Aliased(shared))
    }

    /// Removes and returns the element at `index`.
    ///
    /// Removing the first element is O(1). Dropping the returned element releases owned
    /// storage and leaves aliased storage alone.
    ///
    /// # Errors
    /// [`ListError::IndexOutOfBound`] if `index >= self.len()`; the list is left untouched.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::{LinkedList, ListError};
    ///
    /// let mut list = LinkedList::from([10, 20, 30]);
    ///
    /// assert_eq!(list.remove(1).unwrap().cloned(), 20);
    /// assert_eq!(list, [10, 30]);
    /// assert_eq!(
    ///     list.remove(2).err(),
    ///     Some(ListError::IndexOutOfBound { index: 2, len: 2 })
    /// );
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<Element<T>> {
        self.check_index(index)?;

        if index == 0 {
            return Ok(self.unlink_front());
        }

        let prev = self.seek(index - 1);
        let target = self.store[prev]
            .next
            .expect("chain is shorter than its length");

        let Node { element, next } = self.store.remove(target);
        self.store[prev].next = next;
        if next.is_none() {
            self.rear = Some(prev);
        }

        self.len -= 1;
        Ok(element)
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<Element<T>> {
        if self.is_empty() {
            return None;
        }

        Some(self.unlink_front())
    }

    /// Removes every element for which `predicate` returns `true`, in a single pass, and
    /// returns how many were removed.
    ///
    /// The first element is tested last, after the rest of the list.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([2, 1, 2, 3, 2]);
    ///
    /// assert_eq!(list.remove_where(|value| *value == 2), 3);
    /// assert_eq!(list, [1, 3]);
    /// assert_eq!(list.remove_where(|value| *value > 10), 0);
    /// ```
    pub fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        self.remove_matches(|value| predicate(value))
    }

    /// Removes every element `e` for which `comparator.equals(reference, e)` holds and
    /// returns how many were removed.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::{DefaultComparator, LinkedList};
    ///
    /// let mut list = LinkedList::from([1, 5, 1, 7]);
    /// assert_eq!(list.remove_matching(&1, DefaultComparator), 2);
    ///
    /// let within_one = |a: &i32, b: &i32| (a - b).abs() <= 1;
    /// assert_eq!(list.remove_matching(&6, within_one), 2);
    /// assert!(list.is_empty());
    /// ```
    pub fn remove_matching<C>(&mut self, reference: &T, comparator: C) -> usize
    where
        C: Comparator<T>,
    {
        self.remove_matches(|value| comparator.equals(reference, value))
    }

    /// Visits every element from front to back.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// list.for_each(|value| *value *= 10);
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// ```
    pub fn for_each<F>(&mut self, mut visitor: F)
    where
        F: FnMut(&mut T),
    {
        self.for_each_while(|value| {
            visitor(value);
            true
        });
    }

    /// Visits elements from front to back until `visitor` returns `false`.
    ///
    /// Returns `true` if every element was visited, `false` if the visit stopped early.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1, 2, 3, 4]);
    ///
    /// let mut seen = Vec::new();
    /// let completed = list.for_each_while(|value| {
    ///     seen.push(*value);
    ///     *value < 2
    /// });
    ///
    /// assert!(!completed);
    /// assert_eq!(seen, [1, 2]);
    /// ```
    pub fn for_each_while<F>(&mut self, mut visitor: F) -> bool
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut current = self.head;

        while let Some(handle) = current {
            let node = &mut self.store[handle];
            if !visitor(&mut *node.element.borrow_mut()) {
                return false;
            }
            current = node.next;
        }

        true
    }

    /// Checks whether the list holds an element equal to `value` according to
    /// [`DefaultComparator`].
    ///
    /// Primitive types compare by value and pointer-like types by address; every other
    /// type only matches through [`contains_by`](Self::contains_by).
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let numbers = LinkedList::from([1, 2, 3]);
    /// assert!(numbers.contains(&2));
    /// assert!(!numbers.contains(&4));
    ///
    /// let words = LinkedList::from([String::from("a")]);
    /// assert!(!words.contains(&String::from("a")));
    /// assert!(words.contains_by(&String::from("a"), |a: &String, b: &String| a == b));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: Identity,
    {
        self.contains_by(value, DefaultComparator)
    }

    /// Checks whether the list holds an element `e` for which `comparator.equals(value, e)`
    /// holds.
    pub fn contains_by<C>(&self, value: &T, comparator: C) -> bool
    where
        C: Comparator<T>,
    {
        self.iter().any(|element| comparator.equals(value, &*element))
    }

    /// Appends a deep copy of every element of `other`.
    ///
    /// Copied elements are always owned, whatever their storage kind in `other`.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([1]);
    /// let mut other = LinkedList::from([2, 3]);
    ///
    /// list.append_copied(&other);
    /// *other.get_mut(0).unwrap() = 20;
    ///
    /// assert_eq!(list, [1, 2, 3]);
    /// assert_eq!(other, [20, 3]);
    /// ```
    pub fn append_copied(&mut self, other: &Self)
    where
        T: Clone,
    {
        for element in other.iter() {
            self.push_back((*element).clone());
        }
    }

    /// Appends every element of `other` as aliased storage shared between both lists.
    ///
    /// Owned elements of `other` are moved into shared storage first, so afterwards they
    /// are aliased in `other` as well. A mutation through either list is visible through
    /// the other.
    ///
    /// # Example
    /// ```rust
    /// use cursor_list::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// let mut other = LinkedList::from([1, 2]);
    ///
    /// list.append_aliased(&mut other);
    /// *list.get_mut(1).unwrap() = 20;
    ///
    /// assert_eq!(other, [1, 20]);
    /// ```
    pub fn append_aliased(&mut self, other: &mut Self) {
        let mut current = other.head;

        while let Some(handle) = current {
            let shared = other.store.share(handle);
            current = other.store[handle].next;
            self.push_back_shared(shared);
        }
    }

    /// Removes all elements from the `LinkedList`.
    ///
    /// Owned storage is dropped, aliased storage is left to its owners.
    pub fn clear(&mut self) {
        self.store.clear();
        self.head = None;
        self.rear = None;
        self.len = 0;
        self.cursor.set(None);
    }

    /// Provides an iterator over list's elements.
    ///
    /// # Examples
    /// ```
    /// use cursor_list::LinkedList;
    ///
    /// let list = LinkedList::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next().as_deref(), Some(&0));
    /// assert_eq!(iter.next().as_deref(), Some(&1));
    /// assert_eq!(iter.next().as_deref(), Some(&2));
    /// assert!(iter.next().is_none());
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_list(self)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(ListError::IndexOutOfBound {
                index,
                len: self.len,
            });
        }

        Ok(())
    }

    // Callers guarantee `index < self.len`.
    fn seek(&self, index: usize) -> Handle {
        let head = self.head.expect("non-empty list has a head");
        let cursor = CursorCache::seek(self.cursor.get(), head, &self.store, index);
        self.cursor.set(Some(cursor));
        cursor.node
    }

    fn link_back(&mut self, element: Element<T>) {
        let handle = self.store.insert(Node::new(element));

        match self.rear {
            Some(rear) => self.store[rear].next = Some(handle),
            None => {
                self.head = Some(handle);
                self.cursor.set(Some(CursorCache::new(handle, 0)));
            }
        }

        self.rear = Some(handle);
        self.len += 1;
    }

    fn link_at(&mut self, index: usize, element: Element<T>) {
        if index >= self.len {
            self.link_back(element);
            return;
        }

        if index == 0 {
            let handle = self.store.insert(Node::with_next(element, self.head));
            self.head = Some(handle);
            self.len += 1;
            self.cursor.set(
                self.cursor
                    .get()
                    .map(|cursor| CursorCache::new(cursor.node, cursor.position + 1)),
            );
            return;
        }

        let prev = self.seek(index - 1);
        let next = self.store[prev].next;
        let handle = self.store.insert(Node::with_next(element, next));
        self.store[prev].next = Some(handle);
        self.len += 1;
    }

    fn swap_element(&mut self, index: usize, element: Element<T>) -> Result<Element<T>> {
        self.check_index(index)?;
        let handle = self.seek(index);
        Ok(std::mem::replace(&mut self.store[handle].element, element))
    }

    // Callers guarantee the list is not empty.
    fn unlink_front(&mut self) -> Element<T> {
        let head = self.head.expect("non-empty list has a head");
        let Node { element, next } = self.store.remove(head);

        self.head = next;
        if next.is_none() {
            self.rear = None;
        }
        self.len -= 1;

        let cursor = match self.cursor.get() {
            Some(cursor) if cursor.node != head && cursor.position > 0 => {
                Some(CursorCache::new(cursor.node, cursor.position - 1))
            }
            _ => next.map(|node| CursorCache::new(node, 0)),
        };
        self.cursor.set(cursor);

        element
    }

    fn remove_matches<F>(&mut self, mut matches: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let Some(head) = self.head else {
            return 0;
        };

        let mut removed = 0;

        // `len`, `rear` and the cursor are committed on every unlink.
        let mut prev = head;
        let mut position = 1;
        while let Some(current) = self.store[prev].next {
            if !matches(&*self.store[current].element.borrow()) {
                prev = current;
                position += 1;
                continue;
            }

            let Node { element, next } = self.store.remove(current);
            self.store[prev].next = next;
            if next.is_none() {
                self.rear = Some(prev);
            }
            self.len -= 1;
            removed += 1;

            self.cursor.set(match self.cursor.get() {
                Some(cursor) if cursor.node == current => Some(CursorCache::new(head, 0)),
                Some(cursor) if position < cursor.position => {
                    Some(CursorCache::new(cursor.node, cursor.position - 1))
                }
                cursor => cursor,
            });

            drop(element);
        }

        if matches(&*self.store[head].element.borrow()) {
            self.unlink_front();
            removed += 1;
        }

        debug_assert_eq!(self.store.len(), self.len);
        removed
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Deep copies the list: every element of the clone is owned, even those aliased in
    /// `self`.
    fn clone(&self) -> Self {
        let mut this = Self::with_capacity(self.len);
        this.append_copied(self);
        this
    }

    /// Replaces the content of `self` with a deep copy of `source`.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.append_copied(source);
    }
}

impl<T, const M: usize> PartialEq<[T; M]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T; M]) -> bool {
        self == other.as_slice()
    }
}

impl<T> PartialEq<&[T]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &&[T]) -> bool {
        self == *other
    }
}

impl<T> PartialEq<[T]> for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| *a == *b)
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| *a == *b)
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> Hash for LinkedList<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|v| (*v).hash(state));
    }
}

impl<T> std::fmt::Debug for LinkedList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = Element<T>;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::from_list(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = ElementRef<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::from_list(self)
    }
}

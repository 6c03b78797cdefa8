use std::ops::{Index, IndexMut};

use crate::element::{Element, Shared};

/// A generational reference to a slot of a [`NodeStore`].
///
/// A handle stops resolving as soon as the node it was created for is removed,
/// even if the slot is later reused by another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    index: usize,
    generation: u32,
}

pub struct Node<T> {
    pub element: Element<T>,
    pub next: Option<Handle>,
}

impl<T> Node<T> {
    #[inline]
    pub const fn new(element: Element<T>) -> Self {
        Self {
            element,
            next: None,
        }
    }

    #[inline]
    pub const fn with_next(element: Element<T>, next: Option<Handle>) -> Self {
        Self { element, next }
    }
}

struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Arena holding every node of a list.
///
/// Freed slots are recycled in LIFO order; each reuse bumps the slot generation.
pub struct NodeStore<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> NodeStore<T> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, node: Node<T>) -> Handle {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            debug_assert!(slot.node.is_none());
            slot.node = Some(node);
            return Handle {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len();
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });

        Handle {
            index,
            generation: 0,
        }
    }

    /// Takes the node out of the arena.
    ///
    /// # Panics
    /// Panics if `handle` is stale.
    pub fn remove(&mut self, handle: Handle) -> Node<T> {
        let slot = &mut self.slots[handle.index];
        assert_eq!(slot.generation, handle.generation, "stale node handle");

        let node = slot.node.take().expect("stale node handle");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        node
    }

    #[inline]
    pub fn contains(&self, handle: Handle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: Handle) -> Option<&Node<T>> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut Node<T>> {
        self.slots
            .get_mut(handle.index)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Turns the storage of the node at `handle` into shared storage and returns a
    /// new reference to it. Already aliased storage is shared as is.
    pub fn share(&mut self, handle: Handle) -> Shared<T> {
        let next = self[handle].next;
        let slot = &mut self.slots[handle.index];
        let Node { element, .. } = slot.node.take().expect("stale node handle");
        let (element, shared) = element.into_shared();
        slot.node = Some(Node::with_next(element, next));
        shared
    }

    /// Drops every node while keeping the allocated slots for reuse.
    ///
    /// Every outstanding handle is invalidated.
    pub fn clear(&mut self) {
        self.free.clear();

        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
            self.free.push(index);
        }

        self.len = 0;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }
}

impl<T> Index<Handle> for NodeStore<T> {
    type Output = Node<T>;

    fn index(&self, handle: Handle) -> &Node<T> {
        self.get(handle).expect("stale node handle")
    }
}

impl<T> IndexMut<Handle> for NodeStore<T> {
    fn index_mut(&mut self, handle: Handle) -> &mut Node<T> {
        self.get_mut(handle).expect("stale node handle")
    }
}

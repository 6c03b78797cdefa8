use core::fmt;
use core::ops::{Deref, DerefMut};
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// Storage supplied by the caller and shared with the list.
///
/// Mutations made through the list are visible through every other clone of the
/// handle, and the list never frees the value: it only drops its own reference.
pub type Shared<T> = Rc<RefCell<T>>;

/// The storage of a single list element.
///
/// An element either owns its value or aliases storage owned by someone else.
/// Dropping an [`Element::Owned`] drops the value, dropping an [`Element::Aliased`]
/// only releases the list's reference to it.
///
/// # Example
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use cursor_list::LinkedList;
///
/// let outside = Rc::new(RefCell::new(7));
///
/// let mut list = LinkedList::new();
/// list.push_back(1);
/// list.push_back_shared(Rc::clone(&outside));
///
/// let removed = list.remove(1).unwrap();
/// assert!(removed.is_aliased());
/// assert_eq!(*removed.borrow(), 7);
/// ```
#[derive(Clone)]
pub enum Element<T> {
    Owned(T),
    Aliased(Shared<T>),
}

impl<T> Element<T> {
    #[inline]
    pub const fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    #[inline]
    pub const fn is_aliased(&self) -> bool {
        matches!(self, Self::Aliased(_))
    }

    /// Immutably borrows the stored value.
    ///
    /// # Panics
    /// Panics if the element is aliased and the shared storage is currently mutably borrowed.
    pub fn borrow(&self) -> ElementRef<'_, T> {
        match self {
            Self::Owned(value) => ElementRef::Owned(value),
            Self::Aliased(shared) => ElementRef::Aliased(shared.borrow()),
        }
    }

    /// Mutably borrows the stored value.
    ///
    /// # Panics
    /// Panics if the element is aliased and the shared storage is currently borrowed.
    pub fn borrow_mut(&mut self) -> ElementMut<'_, T> {
        match self {
            Self::Owned(value) => ElementMut::Owned(value),
            Self::Aliased(shared) => ElementMut::Aliased(shared.borrow_mut()),
        }
    }

    /// Unwraps the value if no one else can observe it.
    ///
    /// Owned elements always succeed. Aliased elements succeed only when the list held
    /// the last reference to the shared storage, otherwise the handle is given back.
    pub fn try_into_owned(self) -> Result<T, Shared<T>> {
        match self {
            Self::Owned(value) => Ok(value),
            Self::Aliased(shared) => Rc::try_unwrap(shared).map(RefCell::into_inner),
        }
    }

    /// Returns a copy of the stored value, whatever the storage kind.
    pub fn cloned(&self) -> T
    where
        T: Clone,
    {
        self.borrow().clone()
    }

    /// Converts the element into aliased storage and hands out another reference to it.
    pub(crate) fn into_shared(self) -> (Self, Shared<T>) {
        let shared = match self {
            Self::Owned(value) => Rc::new(RefCell::new(value)),
            Self::Aliased(shared) => shared,
        };

        (Self::Aliased(Rc::clone(&shared)), shared)
    }
}

impl<T: fmt::Debug> fmt::Debug for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owned(value) => f.debug_tuple("Owned").field(value).finish(),
            Self::Aliased(shared) => match shared.try_borrow() {
                Ok(value) => f.debug_tuple("Aliased").field(&*value).finish(),
                Err(_) => f
                    .debug_tuple("Aliased")
                    .field(&format_args!("<borrowed>"))
                    .finish(),
            },
        }
    }
}

/// A shared borrow of an element's value, returned by [`LinkedList::get`](crate::LinkedList::get)
/// and by the list iterators.
pub enum ElementRef<'a, T> {
    Owned(&'a T),
    Aliased(Ref<'a, T>),
}

impl<T> Deref for ElementRef<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self {
            Self::Owned(value) => *value,
            Self::Aliased(value) => &**value,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ElementRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: PartialEq> PartialEq<T> for ElementRef<'_, T> {
    fn eq(&self, other: &T) -> bool {
        **self == *other
    }
}

/// A mutable borrow of an element's value, returned by [`LinkedList::get_mut`](crate::LinkedList::get_mut).
pub enum ElementMut<'a, T> {
    Owned(&'a mut T),
    Aliased(RefMut<'a, T>),
}

impl<T> Deref for ElementMut<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self {
            Self::Owned(value) => &**value,
            Self::Aliased(value) => &**value,
        }
    }
}

impl<T> DerefMut for ElementMut<'_, T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut T {
        match self {
            Self::Owned(value) => &mut **value,
            Self::Aliased(value) => &mut **value,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ElementMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt(f)
    }
}

impl<T: PartialEq> PartialEq<T> for ElementMut<'_, T> {
    fn eq(&self, other: &T) -> bool {
        **self == *other
    }
}

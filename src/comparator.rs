use std::ptr;
use std::rc::Rc;

/// Decides whether two elements are equal for searching and bulk removal.
///
/// Every `Fn(&T, &T) -> bool` closure is a comparator.
///
/// # Example
/// ```rust
/// use cursor_list::LinkedList;
///
/// let list = LinkedList::from([String::from("a"), String::from("B")]);
///
/// assert!(list.contains_by(&String::from("b"), |a: &String, b: &String| {
///     a.eq_ignore_ascii_case(b)
/// }));
/// ```
pub trait Comparator<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Primitive or identity equality.
///
/// Numbers, `bool`, `char` and `()` compare by value, references, raw pointers and `Rc`
/// compare by address. Every other type answers `false` unless it overrides
/// [`Identity::identity_eq`]: no structural equality is assumed for compound values.
///
/// # Example
/// ```rust
/// use cursor_list::{Identity, LinkedList};
///
/// #[derive(Clone, PartialEq)]
/// struct Point(i32, i32);
///
/// impl Identity for Point {}
///
/// let list = LinkedList::from([Point(1, 2)]);
/// assert!(!list.contains(&Point(1, 2)));
/// ```
pub trait Identity {
    #[inline]
    fn identity_eq(&self, _other: &Self) -> bool {
        false
    }
}

macro_rules! identity_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identity for $ty {
                #[inline]
                fn identity_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

identity_by_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, (),
);

impl<T: ?Sized> Identity for &T {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for *const T {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for *mut T {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> Identity for Rc<T> {
    #[inline]
    fn identity_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl Identity for String {}
impl<T> Identity for Vec<T> {}
impl<T: ?Sized> Identity for Box<T> {}

/// The comparator used when none is supplied, built on [`Identity`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultComparator;

impl<T: Identity + ?Sized> Comparator<T> for DefaultComparator {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a.identity_eq(b)
    }
}

//! The ordering capability required by [`Collection::sorted`](crate::Collection::sorted).

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use core::cmp::{Ordering, Reverse};

/// A value that can be checked for presence and compared by its natural order.
///
/// Sorting rejects a collection holding an element for which
/// [`is_present`](Orderable::is_present) is `false`, or one that does not
/// compare equal to itself (like `f64::NAN`).
pub trait Orderable {
    /// Compares two values, `None` if they have no order relative to each other.
    fn order_cmp(&self, other: &Self) -> Option<Ordering>;

    /// `false` for a value standing for a missing element.
    fn is_present(&self) -> bool {
        true
    }

    /// Whether the value takes part in a total order.
    fn is_orderable(&self) -> bool {
        self.order_cmp(self) == Some(Ordering::Equal)
    }
}

macro_rules! orderable_by_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Orderable for $ty {
                #[inline]
                fn order_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(Ord::cmp(self, other))
                }
            }
        )*
    };
}

orderable_by_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, str, String, ()
);

macro_rules! orderable_by_partial_ord {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Orderable for $ty {
                #[inline]
                fn order_cmp(&self, other: &Self) -> Option<Ordering> {
                    PartialOrd::partial_cmp(self, other)
                }
            }
        )*
    };
}

orderable_by_partial_ord!(f32, f64);

impl<T: Orderable> Orderable for Option<T> {
    fn order_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Some(a), Some(b)) => a.order_cmp(b),
            _ => None,
        }
    }

    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(T::is_present)
    }
}

macro_rules! orderable_by_deref {
    ($($ptr:ident),*) => {
        $(
            impl<T: Orderable + ?Sized> Orderable for $ptr<T> {
                #[inline]
                fn order_cmp(&self, other: &Self) -> Option<Ordering> {
                    (**self).order_cmp(&**other)
                }

                #[inline]
                fn is_present(&self) -> bool {
                    (**self).is_present()
                }
            }
        )*
    };
}

orderable_by_deref!(Box, Rc, Arc);

impl<T: Orderable + ?Sized> Orderable for &T {
    #[inline]
    fn order_cmp(&self, other: &Self) -> Option<Ordering> {
        (**self).order_cmp(&**other)
    }

    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T: Orderable> Orderable for Reverse<T> {
    fn order_cmp(&self, other: &Self) -> Option<Ordering> {
        other.0.order_cmp(&self.0)
    }

    fn is_present(&self) -> bool {
        self.0.is_present()
    }
}

// lexicographic, like the `Ord` impls of tuples
impl<A: Orderable, B: Orderable> Orderable for (A, B) {
    fn order_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.order_cmp(&other.0)? {
            Ordering::Equal => self.1.order_cmp(&other.1),
            ord => Some(ord),
        }
    }

    fn is_present(&self) -> bool {
        self.0.is_present() && self.1.is_present()
    }
}

impl<A: Orderable, B: Orderable, C: Orderable> Orderable for (A, B, C) {
    fn order_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.0.order_cmp(&other.0)? {
            Ordering::Equal => (&self.1, &self.2).order_cmp(&(&other.1, &other.2)),
            ord => Some(ord),
        }
    }

    fn is_present(&self) -> bool {
        self.0.is_present() && self.1.is_present() && self.2.is_present()
    }
}

/// Compares two elements that already passed validation.
#[inline]
pub(crate) fn compare<T: Orderable + ?Sized>(a: &T, b: &T) -> Ordering {
    // pairs that are orderable alone but not against each other keep their place
    a.order_cmp(b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_and_strings() {
        assert_eq!(1i32.order_cmp(&2), Some(Ordering::Less));
        assert_eq!("b".order_cmp("a"), Some(Ordering::Greater));
        assert!(String::from("x").is_orderable());
        assert!(5u8.is_present());
    }

    #[test]
    fn nan_is_not_orderable() {
        assert!(!f64::NAN.is_orderable());
        assert!(f64::NAN.is_present());
        assert!(1.5f32.is_orderable());
        assert_eq!(f64::NAN.order_cmp(&1.0), None);
    }

    #[test]
    fn option_presence() {
        assert!(!None::<i32>.is_present());
        assert!(Some(3i32).is_present());
        assert!(!Some(None::<i32>).is_present());
        assert_eq!(Some(1i32).order_cmp(&Some(2)), Some(Ordering::Less));
        assert_eq!(Some(1i32).order_cmp(&None), None);
    }

    #[test]
    fn wrappers() {
        assert_eq!(Reverse(1i32).order_cmp(&Reverse(2)), Some(Ordering::Greater));
        assert_eq!(Box::new(3i32).order_cmp(&Box::new(3)), Some(Ordering::Equal));
        assert_eq!((1i32, "b").order_cmp(&(1, "a")), Some(Ordering::Greater));
        assert_eq!((1i32, 2i32, 3i32).order_cmp(&(1, 2, 4)), Some(Ordering::Less));
        assert!(!(1i32, f64::NAN).is_orderable());
        assert!(!(1i32, None::<u8>).is_present());
    }
}

//! Which values can be null.
//!
//! `Option<T>` and raw pointers can be absent. Everything else implements
//! [`Nullable`] with a constant `false`, so guarding it inlines to nothing.

use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// A value that may be absent.
pub trait Nullable {
    /// Returns `true` when the value is absent.
    fn is_absent(&self) -> bool;
}

impl<T> Nullable for Option<T> {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nullable for *const T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nullable for *mut T {
    #[inline]
    fn is_absent(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    #[inline]
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

macro_rules! never_null {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Nullable for $ty {
                #[inline(always)]
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_null!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

macro_rules! never_null_generic {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<T: ?Sized> Nullable for $ty<T> {
                #[inline(always)]
                fn is_absent(&self) -> bool {
                    false
                }
            }
        )+
    };
}

never_null_generic!(Box, Rc, Arc, NonNull);

impl<T> Nullable for Vec<T> {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Nullable for [T] {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nullable for [T; N] {
    #[inline(always)]
    fn is_absent(&self) -> bool {
        false
    }
}

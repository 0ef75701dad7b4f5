//! Numeric capabilities needed by the range and sign checks.

use std::fmt::Display;

mod sealed {
    pub trait Sealed {}
}

/// A primitive number that can be range- and sign-checked.
///
/// Implemented for every primitive integer and floating-point type. Checks
/// compare values in their own type, so no widening happens and failure
/// messages show the value exactly as the caller passed it.
pub trait Numeric: sealed::Sealed + Copy + PartialOrd + Display {
    /// The additive identity.
    const ZERO: Self;
}

/// A primitive floating-point number.
pub trait Float: Numeric {
    /// Absolute value.
    #[must_use]
    fn magnitude(self) -> Self;
}

macro_rules! impl_numeric {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(0.0 => f32, f64);

impl Float for f32 {
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

impl Float for f64 {
    #[inline]
    fn magnitude(self) -> Self {
        self.abs()
    }
}

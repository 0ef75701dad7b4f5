//! Role-parameterised check implementations.
//!
//! The `argument`, `variable` and `field` façades are thin wrappers that fix
//! the [`Role`]; the logic lives here once.

use crate::error::Error;
use crate::nullable::Nullable;
use crate::numeric::{Float, Numeric};
use crate::result::Result;
use crate::role::Role;

/// Fails with [`Error::Null`] when `value` is absent.
#[inline]
pub fn is_null<T: Nullable + ?Sized>(role: Role, value: &T, name: &str) -> Result<()> {
    if value.is_absent() {
        return Err(Error::null(role, name));
    }
    Ok(())
}

/// Returns the present value, or fails with [`Error::Null`].
#[inline]
pub fn not_null<T>(role: Role, value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| Error::null(role, name))
}

/// Fails with [`Error::OutOfRange`] unless `min <= value <= max`.
#[inline]
pub fn out_of_range<T: Numeric>(role: Role, value: T, min: T, max: T, name: &str) -> Result<()> {
    if value < min || value > max {
        return Err(Error::out_of_range(role, name, value, min, max));
    }
    Ok(())
}

/// Fails with [`Error::Zero`] when `|value| <= epsilon`.
#[inline]
pub fn is_zero<T: Float>(role: Role, value: T, name: &str, epsilon: T) -> Result<()> {
    if value.magnitude() <= epsilon {
        return Err(Error::zero(role, name, value, epsilon));
    }
    Ok(())
}

/// Fails with [`Error::Negative`] when `value < 0`.
#[inline]
pub fn negative<T: Numeric>(role: Role, value: T, name: &str) -> Result<()> {
    if value < T::ZERO {
        return Err(Error::negative(role, name, value));
    }
    Ok(())
}

/// Fails with [`Error::NegativeOrZero`] when `value <= 0`.
#[inline]
pub fn negative_or_zero<T: Numeric>(role: Role, value: T, name: &str) -> Result<()> {
    if value <= T::ZERO {
        return Err(Error::negative_or_zero(role, name, value));
    }
    Ok(())
}

/// Fails with [`Error::NullOrEmpty`] when the text is absent or has no characters.
#[inline]
pub fn is_null_or_empty<S: AsRef<str>>(role: Role, value: Option<S>, name: &str) -> Result<()> {
    match value {
        Some(text) if !text.as_ref().is_empty() => Ok(()),
        _ => Err(Error::null_or_empty(role, name)),
    }
}

/// Fails with [`Error::NullOrEmpty`] when the sequence is absent or yields nothing.
///
/// Pulls at most one element, so lazy sequences are not driven further.
#[inline]
pub fn is_null_or_empty_seq<I: IntoIterator>(role: Role, value: Option<I>, name: &str) -> Result<()> {
    match value.and_then(|seq| seq.into_iter().next()) {
        Some(_) => Ok(()),
        None => Err(Error::null_or_empty(role, name)),
    }
}

/// Fails with [`Error::Null`] when the raw pointer is null.
#[cfg(feature = "raw-address")]
#[inline]
pub fn is_null_pointer<T: ?Sized>(role: Role, pointer: *const T, name: &str) -> Result<()> {
    if pointer.is_null() {
        return Err(Error::null(role, name));
    }
    Ok(())
}

/// Fails with [`Error::ZeroAddress`] when the address is zero.
#[cfg(feature = "raw-address")]
#[inline]
pub fn is_address_zero(role: Role, address: usize, name: &str) -> Result<()> {
    if address == 0 {
        return Err(Error::zero_address(role, name));
    }
    Ok(())
}

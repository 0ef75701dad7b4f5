//! Early-return guards with lazily formatted messages.
//!
//! [`precondition::failed`](crate::precondition::failed) takes a ready-made
//! message. These macros build the message only when the condition is false,
//! then return `Err(Error::InvalidOperation)` from the enclosing function.
//!
//! ```
//! use guard::{ensure_invariant, ensure_precondition};
//!
//! fn take(stock: u32, wanted: u32) -> guard::Result<u32> {
//!     ensure_precondition!(wanted > 0, "nothing requested");
//!     ensure_invariant!(wanted <= stock, "wanted {} but only {} in stock", wanted, stock);
//!     Ok(stock - wanted)
//! }
//!
//! assert_eq!(take(5, 2), Ok(3));
//! let err = take(1, 2).err();
//! assert_eq!(
//!     err.as_ref().and_then(guard::Error::message),
//!     Some("wanted 2 but only 1 in stock")
//! );
//! ```

/// Return early with an invalid operation error if a precondition is false.
#[macro_export]
macro_rules! ensure_precondition {
    ($cond:expr, $($fmt:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::Into::into(
                $crate::Error::invalid_operation(::std::format!($($fmt)+)),
            ));
        }
    };
}

/// Return early with an invalid operation error if an invariant is false.
#[macro_export]
macro_rules! ensure_invariant {
    ($cond:expr, $($fmt:tt)+) => {
        if !$cond {
            return ::core::result::Result::Err(::core::convert::Into::into(
                $crate::Error::invalid_operation(::std::format!($($fmt)+)),
            ));
        }
    };
}

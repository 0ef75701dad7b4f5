//! Guard clauses for arguments, local variables, fields and struct state.
//!
//! Each check either returns `Ok(())` or a typed [`Error`] whose message names
//! the role and display name of the checked value, plus the offending value
//! and bounds where that helps:
//!
//! ```text
//! argument x=-1 is out of range [0, 1]
//! ```
//!
//! Checks are grouped by the role of the value being checked. [`argument`],
//! [`variable`] and [`field`] expose the same operations and differ only in
//! message wording. [`precondition`], [`invariant`] and [`structure`] are
//! role independent.
//!
//! # Example
//!
//! ```
//! use guard::{argument, field, FailureKind};
//!
//! struct Mixer {
//!     channels: Vec<f32>,
//! }
//!
//! impl Mixer {
//!     fn set_gain(&mut self, channel: usize, gain: f32) -> guard::Result<()> {
//!         field::is_null_or_empty_seq(Some(&self.channels), "channels")?;
//!         argument::out_of_range(gain, 0.0, 1.0, "gain")?;
//!         if let Some(slot) = self.channels.get_mut(channel) {
//!             *slot = gain;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut mixer = Mixer { channels: vec![0.0; 2] };
//! assert!(mixer.set_gain(0, 0.5).is_ok());
//!
//! let err = mixer.set_gain(0, 1.5).err();
//! assert_eq!(err.as_ref().map(guard::Error::kind), Some(FailureKind::OutOfRange));
//! assert_eq!(
//!     err.map(|e| e.to_string()).as_deref(),
//!     Some("argument gain=1.5 is out of range [0, 1]")
//! );
//! ```
//!
//! # Features
//!
//! - `raw-address` (default): raw pointer and zero-address checks.

pub mod check;
mod contract;
pub mod error;
mod macros;
pub mod nullable;
pub mod numeric;
pub mod result;
pub mod role;

pub use contract::{invariant, precondition, structure};
pub use error::{Error, FailureKind};
pub use nullable::Nullable;
pub use numeric::{Float, Numeric};
pub use result::{Result, ResultExt};
pub use role::Role;

macro_rules! role_facade {
    ($(#[$meta:meta])* $module:ident => $role:expr) => {
        $(#[$meta])*
        pub mod $module {
            use crate::check;
            use crate::nullable::Nullable;
            use crate::numeric::{Float, Numeric};
            use crate::result::Result;
            use crate::role::Role;

            const ROLE: Role = $role;

            /// Fails with a null error when `value` is absent.
            ///
            /// Non-optional value types are never absent, so the check compiles
            /// away for them.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Null`](crate::Error::Null) for an absent value.
            #[inline]
            pub fn is_null<T: Nullable + ?Sized>(value: &T, name: &str) -> Result<()> {
                check::is_null(ROLE, value, name)
            }

            /// Returns the present value, or a null error.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Null`](crate::Error::Null) for `None`.
            #[inline]
            pub fn not_null<T>(value: Option<T>, name: &str) -> Result<T> {
                check::not_null(ROLE, value, name)
            }

            /// Fails when `value` is outside `[min, max]`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::OutOfRange`](crate::Error::OutOfRange) if
            /// `value < min` or `value > max`.
            #[inline]
            pub fn out_of_range<T: Numeric>(value: T, min: T, max: T, name: &str) -> Result<()> {
                check::out_of_range(ROLE, value, min, max, name)
            }

            /// Fails when `|value| <= epsilon`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Zero`](crate::Error::Zero) for a value within
            /// epsilon of zero.
            #[inline]
            pub fn is_zero<T: Float>(value: T, name: &str, epsilon: T) -> Result<()> {
                check::is_zero(ROLE, value, name, epsilon)
            }

            /// Fails when `value < 0`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Negative`](crate::Error::Negative) for a
            /// negative value.
            #[inline]
            pub fn negative<T: Numeric>(value: T, name: &str) -> Result<()> {
                check::negative(ROLE, value, name)
            }

            /// Fails when `value <= 0`.
            ///
            /// # Errors
            ///
            /// Returns [`Error::NegativeOrZero`](crate::Error::NegativeOrZero)
            /// unless the value is strictly positive.
            #[inline]
            pub fn negative_or_zero<T: Numeric>(value: T, name: &str) -> Result<()> {
                check::negative_or_zero(ROLE, value, name)
            }

            /// Fails when the text is absent or empty.
            ///
            /// # Errors
            ///
            /// Returns [`Error::NullOrEmpty`](crate::Error::NullOrEmpty).
            #[inline]
            pub fn is_null_or_empty<S: AsRef<str>>(value: Option<S>, name: &str) -> Result<()> {
                check::is_null_or_empty(ROLE, value, name)
            }

            /// Fails when the sequence is absent or yields no element.
            ///
            /// At most one element is pulled from the sequence.
            ///
            /// # Errors
            ///
            /// Returns [`Error::NullOrEmpty`](crate::Error::NullOrEmpty).
            #[inline]
            pub fn is_null_or_empty_seq<I: IntoIterator>(value: Option<I>, name: &str) -> Result<()> {
                check::is_null_or_empty_seq(ROLE, value, name)
            }

            /// Fails when the raw pointer is null.
            ///
            /// # Errors
            ///
            /// Returns [`Error::Null`](crate::Error::Null).
            #[cfg(feature = "raw-address")]
            #[inline]
            pub fn is_null_pointer<T: ?Sized>(pointer: *const T, name: &str) -> Result<()> {
                check::is_null_pointer(ROLE, pointer, name)
            }

            /// Fails when the address is zero.
            ///
            /// # Errors
            ///
            /// Returns [`Error::ZeroAddress`](crate::Error::ZeroAddress).
            #[cfg(feature = "raw-address")]
            #[inline]
            pub fn is_address_zero(address: usize, name: &str) -> Result<()> {
                check::is_address_zero(ROLE, address, name)
            }
        }
    };
}

role_facade!(
    /// Guards for function parameters.
    argument => Role::Argument
);

role_facade!(
    /// Guards for local bindings.
    variable => Role::Variable
);

role_facade!(
    /// Guards for struct fields.
    field => Role::Field
);

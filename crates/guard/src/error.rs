//! Failure types raised by guard checks.
//!
//! Every violated check produces exactly one [`Error`]. The constructors on
//! [`Error`] are the only place failure messages are formatted.

use std::fmt::Display;

use thiserror::Error;

use crate::role::Role;

/// Category of a guard failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// A required value is absent, or a raw address is null.
    NullReference,
    /// A floating-point value is within epsilon of zero.
    Zero,
    /// A numeric value is outside its inclusive bounds, negative, or not
    /// strictly positive.
    OutOfRange,
    /// A text or sequence value is absent or empty.
    InvalidArgument,
    /// A value was used before it was explicitly constructed.
    Uninitialized,
    /// A precondition or invariant evaluated false.
    InvalidOperation,
}

/// A violated guard.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{role} {name} is null")]
    Null { role: Role, name: String },

    #[error("{role} {name} is a zero address")]
    ZeroAddress { role: Role, name: String },

    #[error("{role} {name}={value} is zero (epsilon {epsilon})")]
    Zero {
        role: Role,
        name: String,
        value: String,
        epsilon: String,
    },

    #[error("{role} {name}={value} is out of range [{min}, {max}]")]
    OutOfRange {
        role: Role,
        name: String,
        value: String,
        min: String,
        max: String,
    },

    #[error("{role} {name}={value} must be equal or greater than zero")]
    Negative {
        role: Role,
        name: String,
        value: String,
    },

    #[error("{role} {name}={value} must be greater than zero")]
    NegativeOrZero {
        role: Role,
        name: String,
        value: String,
    },

    #[error("{role} {name} is null or empty")]
    NullOrEmpty { role: Role, name: String },

    #[error("value is not initialized")]
    NotInitialized,

    #[error("{message}")]
    InvalidOperation { message: String },
}

impl Error {
    /// Create a null value error.
    #[cold]
    #[must_use]
    pub fn null(role: Role, name: &str) -> Self {
        Self::Null {
            role,
            name: name.to_owned(),
        }
    }

    /// Create a zero address error.
    #[cold]
    #[must_use]
    pub fn zero_address(role: Role, name: &str) -> Self {
        Self::ZeroAddress {
            role,
            name: name.to_owned(),
        }
    }

    /// Create a near-zero error.
    #[cold]
    #[must_use]
    pub fn zero(role: Role, name: &str, value: impl Display, epsilon: impl Display) -> Self {
        Self::Zero {
            role,
            name: name.to_owned(),
            value: value.to_string(),
            epsilon: epsilon.to_string(),
        }
    }

    /// Create an out of range error.
    #[cold]
    #[must_use]
    pub fn out_of_range(
        role: Role,
        name: &str,
        value: impl Display,
        min: impl Display,
        max: impl Display,
    ) -> Self {
        Self::OutOfRange {
            role,
            name: name.to_owned(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create a negative value error.
    #[cold]
    #[must_use]
    pub fn negative(role: Role, name: &str, value: impl Display) -> Self {
        Self::Negative {
            role,
            name: name.to_owned(),
            value: value.to_string(),
        }
    }

    /// Create a negative-or-zero value error.
    #[cold]
    #[must_use]
    pub fn negative_or_zero(role: Role, name: &str, value: impl Display) -> Self {
        Self::NegativeOrZero {
            role,
            name: name.to_owned(),
            value: value.to_string(),
        }
    }

    /// Create a null-or-empty error.
    #[cold]
    #[must_use]
    pub fn null_or_empty(role: Role, name: &str) -> Self {
        Self::NullOrEmpty {
            role,
            name: name.to_owned(),
        }
    }

    /// Create an invalid operation error.
    #[cold]
    #[must_use]
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// The failure category of this error.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Null { .. } | Self::ZeroAddress { .. } => FailureKind::NullReference,
            Self::Zero { .. } => FailureKind::Zero,
            Self::OutOfRange { .. } | Self::Negative { .. } | Self::NegativeOrZero { .. } => {
                FailureKind::OutOfRange
            }
            Self::NullOrEmpty { .. } => FailureKind::InvalidArgument,
            Self::NotInitialized => FailureKind::Uninitialized,
            Self::InvalidOperation { .. } => FailureKind::InvalidOperation,
        }
    }

    /// Role of the checked value, if the failure is about a named value.
    #[must_use]
    pub const fn role(&self) -> Option<Role> {
        match self {
            Self::Null { role, .. }
            | Self::ZeroAddress { role, .. }
            | Self::Zero { role, .. }
            | Self::OutOfRange { role, .. }
            | Self::Negative { role, .. }
            | Self::NegativeOrZero { role, .. }
            | Self::NullOrEmpty { role, .. } => Some(*role),
            Self::NotInitialized | Self::InvalidOperation { .. } => None,
        }
    }

    /// Display name of the checked value, if the failure is about a named value.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Null { name, .. }
            | Self::ZeroAddress { name, .. }
            | Self::Zero { name, .. }
            | Self::OutOfRange { name, .. }
            | Self::Negative { name, .. }
            | Self::NegativeOrZero { name, .. }
            | Self::NullOrEmpty { name, .. } => Some(name),
            Self::NotInitialized | Self::InvalidOperation { .. } => None,
        }
    }

    /// Caller-supplied message of a failed precondition or invariant.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidOperation { message } => Some(message),
            _ => None,
        }
    }
}

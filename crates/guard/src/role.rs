//! The syntactic role of a guarded value.
//!
//! A role only changes how a failure reads ("argument x", "variable x",
//! "field x"); the checks themselves are identical for every role.

use std::fmt;

/// What kind of binding the checked value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A function parameter.
    Argument,
    /// A local binding.
    Variable,
    /// A struct field.
    Field,
}

impl Role {
    /// Lowercase name used in failure messages.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Variable => "variable",
            Self::Field => "field",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

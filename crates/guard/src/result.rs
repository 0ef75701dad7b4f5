//! Result type and caller-side combinators for guard failures.
//!
//! Checks never log or recover on their own; a failed guard is returned as
//! `Err` and the caller decides. [`ResultExt`] covers the common "recover and
//! leave a trace" cases without reaching for `unwrap`.

use crate::error::Error;

/// The result of a guard check.
///
/// # Examples
///
/// ```
/// use guard::{argument, Result};
///
/// fn scale(factor: f64) -> Result<f64> {
///     argument::negative_or_zero(factor, "factor")?;
///     Ok(factor * 2.0)
/// }
///
/// assert!(scale(0.5).is_ok());
/// assert!(scale(0.0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Recovery helpers for guard results.
pub trait ResultExt<T> {
    /// Convert to an `Option`, logging the violation if present.
    fn into_option_logged(self) -> Option<T>;

    /// Get the value or `default`, logging the violation if present.
    fn or_default_logged(self, default: T) -> T;

    /// Inspect the violation without consuming the result.
    fn inspect_violation<F: FnOnce(&Error)>(self, f: F) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_logged(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                log_violation(&e, "guard violated");
                None
            }
        }
    }

    fn or_default_logged(self, default: T) -> T {
        match self {
            Ok(value) => value,
            Err(e) => {
                log_violation(&e, "guard violated, using default");
                default
            }
        }
    }

    fn inspect_violation<F: FnOnce(&Error)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

fn log_violation(error: &Error, context: &str) {
    tracing::warn!(
        kind = ?error.kind(),
        role = error.role().map(|r| r.as_str()),
        name = error.name(),
        "{context}: {error}"
    );
}

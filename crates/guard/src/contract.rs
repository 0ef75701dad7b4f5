//! Role-independent guards: preconditions, invariants and struct initialisation.

/// Caller-stated preconditions.
pub mod precondition {
    use crate::error::Error;
    use crate::result::Result;

    /// Fails with [`Error::InvalidOperation`] carrying `message` when
    /// `precondition` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the precondition does not hold.
    #[inline]
    pub fn failed(precondition: bool, message: &str) -> Result<()> {
        if !precondition {
            return Err(Error::invalid_operation(message));
        }
        Ok(())
    }
}

/// Internal consistency checks.
pub mod invariant {
    use crate::error::Error;
    use crate::result::Result;

    /// Fails with [`Error::InvalidOperation`] carrying `message` when
    /// `invariant` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOperation`] if the invariant does not hold.
    #[inline]
    pub fn failed(invariant: bool, message: &str) -> Result<()> {
        if !invariant {
            return Err(Error::invalid_operation(message));
        }
        Ok(())
    }
}

/// Guards for value types whose default state differs from a constructed one.
///
/// ```
/// use guard::structure;
///
/// #[derive(Default)]
/// struct Handle {
///     id: u32,
///     initialized: bool,
/// }
///
/// impl Handle {
///     fn id(&self) -> guard::Result<u32> {
///         structure::is_not_initialized(self.initialized)?;
///         Ok(self.id)
///     }
/// }
///
/// assert!(Handle::default().id().is_err());
/// assert_eq!(Handle { id: 4, initialized: true }.id(), Ok(4));
/// ```
pub mod structure {
    use crate::error::Error;
    use crate::result::Result;

    /// Fails with [`Error::NotInitialized`] when `is_initialized` is false.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInitialized`] for a value that was never constructed.
    #[inline]
    pub fn is_not_initialized(is_initialized: bool) -> Result<()> {
        if !is_initialized {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }
}

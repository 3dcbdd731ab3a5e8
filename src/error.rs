//! Default fault type for fallible operations.
//!
//! This module defines [`SupplyError`], the failure type used by suppliers and
//! transforms that do not carry a domain error of their own. The library never
//! converts a caller's fault into this type: every combinator propagates the
//! original fault value untouched, whatever its type.
//!
//! [`SupplyError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics and a coarse [`SupplyError::is_transient`] classification.

use thiserror::Error;

/// # Default failure type for fallible operations.
///
/// Suitable for closures and demos that have no richer error to raise.
/// Operations with a domain error should use that error directly; nothing in
/// this crate requires faults to be `SupplyError`.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SupplyError {
    /// Producing the value failed; a later invocation may succeed.
    #[error("supply failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Non-recoverable failure; re-invoking the operation will not help.
    #[error("fatal error: {error}")]
    Fatal {
        /// The underlying error message.
        error: String,
    },
}

impl SupplyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use fallibles::SupplyError;
    ///
    /// let err = SupplyError::Fail { error: "boom".into() };
    /// assert_eq!(err.as_label(), "supply_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SupplyError::Fail { .. } => "supply_failed",
            SupplyError::Fatal { .. } => "supply_fatal",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SupplyError::Fail { error } => format!("error: {error}"),
            SupplyError::Fatal { error } => format!("fatal: {error}"),
        }
    }

    /// Indicates whether the failure is transient.
    ///
    /// Returns `true` for [`SupplyError::Fail`], `false` otherwise. The crate
    /// itself never re-invokes an operation; this is a hint for callers.
    ///
    /// # Example
    /// ```
    /// use fallibles::SupplyError;
    ///
    /// let transient = SupplyError::Fail { error: "boom".into() };
    /// assert!(transient.is_transient());
    ///
    /// let fatal = SupplyError::Fatal { error: "nope".into() };
    /// assert!(!fatal.is_transient());
    /// ```
    pub fn is_transient(&self) -> bool {
        matches!(self, SupplyError::Fail { .. })
    }
}

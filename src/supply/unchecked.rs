//! # Checked-to-unchecked fault adaptation.
//!
//! [`Unchecked`] widens a supplier's failure channel: the adapted operation
//! returns the produced value directly and re-raises a fault by unwinding,
//! with the **original fault value** as the panic payload. Nothing about the
//! fault changes on the way through - no wrapping, no message formatting, no
//! conversion into another error kind. The adaptation changes the declaration
//! obligation of the failure, not its content.
//!
//! A caller that does catch the unwind can recover the typed fault with
//! [`downcast_fault`]:
//!
//! ```rust
//! use std::panic::{self, AssertUnwindSafe};
//!
//! use fallibles::{downcast_fault, Supply, SupplyError, SupplyFn};
//!
//! let boom = SupplyFn::new("boom", || {
//!     Err::<i32, SupplyError>(SupplyError::Fail { error: "disk gone".into() })
//! });
//! let plain = boom.unchecked();
//!
//! let payload = panic::catch_unwind(AssertUnwindSafe(|| plain.call())).unwrap_err();
//! let fault = downcast_fault::<SupplyError>(payload).expect("original fault type");
//! assert_eq!(fault.as_label(), "supply_failed");
//! ```

use std::any::Any;
use std::panic;

use crate::supply::supplier::Supply;

/// Supplier adapted onto the unchecked failure channel.
///
/// Built via [`Supply::unchecked`](crate::Supply::unchecked). [`call`](Unchecked::call)
/// produces the value or unwinds carrying the fault; [`into_fn`](Unchecked::into_fn)
/// yields the adapted operation as a plain `Fn() -> Item` closure.
pub struct Unchecked<S> {
    inner: S,
}

impl<S> Unchecked<S>
where
    S: Supply,
{
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Produces the value; a fault is re-raised by unwinding.
    ///
    /// The panic payload is the fault value itself, downcastable to its exact
    /// type. Identity is preserved end to end.
    ///
    /// # Example
    /// ```
    /// use fallibles::{Supply, SupplyError, SupplyFn};
    ///
    /// let ten = SupplyFn::new("ten", || Ok::<i32, SupplyError>(10));
    /// assert_eq!(ten.unchecked().call(), 10);
    /// ```
    pub fn call(&self) -> S::Item
    where
        S::Fault: Any + Send,
    {
        match self.inner.get() {
            Ok(value) => value,
            Err(fault) => panic::panic_any(fault),
        }
    }

    /// Converts the adapter into a plain non-declaring closure.
    ///
    /// # Example
    /// ```
    /// use fallibles::{Supply, SupplyError, SupplyFn};
    ///
    /// let ten = SupplyFn::new("ten", || Ok::<i32, SupplyError>(10));
    /// let f = ten.unchecked().into_fn();
    /// assert_eq!(f(), 10);
    /// ```
    pub fn into_fn(self) -> impl Fn() -> S::Item
    where
        S::Fault: Any + Send,
    {
        move || self.call()
    }

    /// Returns the wrapped supplier, undoing the adaptation.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

/// Recovers a typed fault from a caught unwind payload.
///
/// Returns the original payload on type mismatch, so callers can resume
/// unwinding or try another type.
pub fn downcast_fault<E: Any>(payload: Box<dyn Any + Send>) -> Result<E, Box<dyn Any + Send>> {
    payload.downcast::<E>().map(|fault| *fault)
}

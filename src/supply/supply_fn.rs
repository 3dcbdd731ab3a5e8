//! # Function-backed supplier (`SupplyFn`)
//!
//! [`SupplyFn`] wraps a closure `F: Fn() -> Result<T, E>` together with a
//! stable name. The closure is stored by value and invoked afresh on every
//! [`get`](crate::Supply::get); there is no shared mutable state and no
//! `Mutex`. If the closure needs shared state, capture an `Arc<...>`
//! explicitly.
//!
//! ## Example
//! ```rust
//! use fallibles::{Supply, SupplyError, SupplyFn, SupplyRef};
//!
//! let s: SupplyRef<i32, SupplyError> = SupplyFn::arc("answer", || Ok(42));
//!
//! assert_eq!(s.name(), "answer");
//! assert_eq!(s.get().unwrap(), 42);
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use crate::supply::supplier::Supply;

/// Function-backed supplier implementation.
///
/// Wraps a closure and gives it a stable name for events and logs.
#[derive(Debug)]
pub struct SupplyFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SupplyFn<F> {
    /// Creates a new function-backed supplier.
    ///
    /// Prefer [`SupplyFn::arc`] when you immediately need a
    /// [`SupplyRef`](crate::SupplyRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the supplier and returns it as a shared handle (`Arc<Self>`).
    ///
    /// ## Example
    /// ```rust
    /// use fallibles::{Supply, SupplyError, SupplyFn};
    ///
    /// let s = SupplyFn::arc("hello", || Ok::<&str, SupplyError>("hi"));
    /// assert_eq!(s.name(), "hello");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<T, E, F> Supply for SupplyFn<F>
where
    F: Fn() -> Result<T, E> + Send + Sync + 'static,
{
    type Item = T;
    type Fault = E;

    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self) -> Result<T, E> {
        (self.f)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SupplyError;

    #[test]
    fn test_get_delegates_to_closure() {
        let s = SupplyFn::new("ten", || Ok::<i32, SupplyError>(10));
        assert_eq!(s.get().unwrap(), 10);
    }

    #[test]
    fn test_name_is_reported() {
        let s = SupplyFn::new("config-loader", || Ok::<(), SupplyError>(()));
        assert_eq!(s.name(), "config-loader");
    }

    #[test]
    fn test_shared_handle_still_supplies() {
        let s = SupplyFn::arc("answer", || Ok::<i32, SupplyError>(42));
        assert_eq!(s.get().unwrap(), 42);
        assert_eq!(s.name(), "answer");
    }

    #[test]
    fn test_closure_is_a_supplier_without_wrapping() {
        let s = || Ok::<i32, SupplyError>(7);
        assert_eq!(s.get().unwrap(), 7);
    }
}

//! # Supplier trait: a deferred computation that produces a value or fails.
//!
//! [`Supply`] is the crate's central abstraction: a zero-argument operation
//! with an [`Item`](Supply::Item) it produces and a [`Fault`](Supply::Fault)
//! it may raise instead. Any `Fn() -> Result<T, E> + Send + Sync + 'static`
//! closure is a supplier; [`SupplyFn`](crate::SupplyFn) wraps a closure with
//! a stable name for observation and logs.
//!
//! The trait makes no guarantee about repeatability, referential transparency,
//! or cost. An operation may be invoked zero or more times; side effects
//! belong entirely to the closure behind it. Callers must not assume
//! idempotence unless the concrete implementation documents it.
//!
//! ## Fault discipline
//! Combinators never translate, wrap, retry, suppress, or log a fault: the
//! value raised by the innermost operation is the value the outermost caller
//! observes.

use std::any::Any;
use std::sync::Arc;

use crate::observe::{Observe, Observed};
use crate::supply::and_then::AndThen;
use crate::supply::unchecked::Unchecked;
use crate::transform::Transform;

/// Shared handle to a supplier (`Arc<dyn Supply>`).
///
/// A handle can re-enter composition as a closure over its `get`:
///
/// ```
/// use fallibles::{Supply, SupplyError, SupplyFn, SupplyRef};
///
/// let port: SupplyRef<u16, SupplyError> =
///     SupplyFn::new("port", || Ok::<u16, SupplyError>(8080)).shared();
///
/// let handle = port.clone();
/// let bumped = (move || handle.get()).and_then(|p: u16| Ok::<u16, SupplyError>(p + 1));
/// assert_eq!(bumped.get().unwrap(), 8081);
/// ```
pub type SupplyRef<T, E> = Arc<dyn Supply<Item = T, Fault = E>>;

/// # Zero-argument fallible operation.
///
/// A `Supply` produces an [`Item`](Supply::Item) or raises a
/// [`Fault`](Supply::Fault). Invocation is synchronous: [`get`](Supply::get)
/// runs to completion on the caller's thread before control returns.
///
/// # Example
/// ```
/// use fallibles::{Supply, SupplyError};
///
/// struct Port(u16);
///
/// impl Supply for Port {
///     type Item = u16;
///     type Fault = SupplyError;
///
///     fn name(&self) -> &str { "port" }
///
///     fn get(&self) -> Result<u16, SupplyError> {
///         Ok(self.0)
///     }
/// }
///
/// let p = Port(8080);
/// assert_eq!(p.get().unwrap(), 8080);
/// assert_eq!(p.name(), "port");
/// ```
pub trait Supply: Send + Sync + 'static {
    /// The value this operation produces.
    type Item;
    /// The failure this operation may raise instead.
    type Fault;

    /// Returns a stable, human-readable name used in events and logs.
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose - override
    /// it when possible. [`SupplyFn`](crate::SupplyFn) carries an explicit
    /// name; adapters report the name of the operation they wrap.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Produces the value, or raises whatever fault production hit.
    fn get(&self) -> Result<Self::Item, Self::Fault>;

    /// Composes this supplier with a subsequent transformation.
    ///
    /// The returned operation first runs `self` to completion, then applies
    /// `transform` to the produced value. Faults from either step propagate
    /// verbatim; the transform is never invoked when `self` fails.
    ///
    /// The transformation is taken by value, so an absent transformation is
    /// rejected at composition time by the compiler; only production faults
    /// can surface at invocation time.
    ///
    /// # Example
    /// ```
    /// use fallibles::{Supply, SupplyError, SupplyFn};
    ///
    /// let ten = SupplyFn::new("ten", || Ok::<i32, SupplyError>(10));
    /// let doubled = ten.and_then(|x: i32| Ok::<i32, SupplyError>(x * 2));
    /// assert_eq!(doubled.get().unwrap(), 20);
    /// ```
    fn and_then<F>(self, transform: F) -> AndThen<Self, F>
    where
        Self: Sized,
        F: Transform<Self::Item, Fault = Self::Fault>,
    {
        AndThen::new(self, transform)
    }

    /// Adapts this supplier onto the unchecked failure channel.
    ///
    /// The adapted operation returns [`Item`](Supply::Item) directly; a fault
    /// is re-raised by unwinding with the original fault value as the panic
    /// payload. Identity is preserved: no wrapping, no message formatting, no
    /// conversion. See [`Unchecked`] for recovering the typed fault.
    fn unchecked(self) -> Unchecked<Self>
    where
        Self: Sized,
        Self::Fault: Any + Send,
    {
        Unchecked::new(self)
    }

    /// Wraps this supplier so every invocation is reported to `observer`.
    ///
    /// Purely additive: the inner result is returned untouched. See
    /// [`Observed`].
    fn observed(self, observer: Arc<dyn Observe>) -> Observed<Self>
    where
        Self: Sized,
    {
        Observed::new(self, observer)
    }

    /// Returns this supplier as a shared handle (`Arc<dyn Supply>`).
    fn shared(self) -> SupplyRef<Self::Item, Self::Fault>
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

impl<T, E, F> Supply for F
where
    F: Fn() -> Result<T, E> + Send + Sync + 'static, // Fn, not FnMut
{
    type Item = T;
    type Fault = E;

    fn get(&self) -> Result<T, E> {
        (self)()
    }
}

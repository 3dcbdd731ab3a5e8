//! # Transform trait: a fallible computation from one value to another.
//!
//! [`Transform`] mirrors [`Supply`](crate::Supply) for operations that take an
//! input. Any `Fn(I) -> Result<O, E> + Send + Sync + 'static` closure is a
//! transform. Like suppliers, transforms are synchronous, hold no library
//! state, and propagate faults verbatim.

use crate::transform::chain::Chain;

/// # Single-argument fallible operation.
///
/// Applies to an input of type `I`, producing an
/// [`Output`](Transform::Output) or raising a [`Fault`](Transform::Fault).
///
/// # Example
/// ```
/// use fallibles::{SupplyError, Transform};
///
/// let parse = |raw: &str| {
///     raw.trim().parse::<u16>().map_err(|e| SupplyError::Fail { error: e.to_string() })
/// };
///
/// assert_eq!(parse.apply(" 8080 ").unwrap(), 8080);
/// assert!(parse.apply("not-a-port").is_err());
/// ```
pub trait Transform<I>: Send + Sync + 'static {
    /// The value this operation produces.
    type Output;
    /// The failure this operation may raise instead.
    type Fault;

    /// Applies the transformation to `input`.
    fn apply(&self, input: I) -> Result<Self::Output, Self::Fault>;

    /// Composes this transform with a subsequent one.
    ///
    /// The returned transform runs `self` to completion, then feeds the
    /// produced value to `next`. A fault from `self` short-circuits; `next`
    /// is never invoked in that case.
    ///
    /// # Example
    /// ```
    /// use fallibles::{SupplyError, Transform};
    ///
    /// let double = |x: i32| Ok::<i32, SupplyError>(x * 2);
    /// let shift = |x: i32| Ok::<i32, SupplyError>(x + 1);
    ///
    /// let composed = double.chain(shift);
    /// assert_eq!(composed.apply(10).unwrap(), 21);
    /// ```
    fn chain<B>(self, next: B) -> Chain<Self, B>
    where
        Self: Sized,
        B: Transform<Self::Output, Fault = Self::Fault>,
    {
        Chain::new(self, next)
    }
}

impl<I, O, E, F> Transform<I> for F
where
    F: Fn(I) -> Result<O, E> + Send + Sync + 'static,
{
    type Output = O;
    type Fault = E;

    fn apply(&self, input: I) -> Result<O, E> {
        (self)(input)
    }
}

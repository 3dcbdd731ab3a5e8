//! # fallibles
//!
//! **Fallibles** is a small library of fallible functional primitives for Rust.
//!
//! It provides deferred computations that produce a value or fail, combinators
//! to compose them sequentially, and an adapter that moves a fault from the
//! checked channel (`Result`) onto the unchecked channel (unwinding) without
//! altering the fault's identity. The crate is designed as a building block
//! for higher-level pipelines and fault-tolerant plumbing.
//!
//! ## Architecture
//! ```text
//!     ┌──────────────────┐      ┌──────────────────────┐
//!     │  closure         │      │  SupplyFn            │
//!     │  || -> Result<T> │      │  (named closure)     │
//!     └────────┬─────────┘      └──────────┬───────────┘
//!              └───────────┬───────────────┘
//!                          ▼
//!               trait Supply (get / name)
//!                          │
//!        ┌─────────────────┼──────────────────┬────────────────┐
//!        ▼                 ▼                  ▼                ▼
//!   and_then(f)       unchecked()        observed(obs)     shared()
//!   AndThen<S, F>     Unchecked<S>       Observed<S>       SupplyRef
//!   (runs S fully,    (Ok(v) -> v,       (publishes        (Arc<dyn Supply>)
//!    then applies f)   Err(e) -> panic    InvokeEvents
//!                      carrying e)        around get)
//! ```
//!
//! A production fault passes through every combinator verbatim: nothing is
//! translated, wrapped, retried, or logged by the core types. Observation is
//! an opt-in decorator, and even there the fault itself is returned untouched.
//!
//! ## Features
//! | Area            | Description                                                  | Key types / traits                  |
//! |-----------------|--------------------------------------------------------------|-------------------------------------|
//! | **Suppliers**   | Zero-argument fallible operations, easy to compose and share.| [`Supply`], [`SupplyFn`], [`SupplyRef`] |
//! | **Transforms**  | Single-argument fallible operations with chaining.           | [`Transform`], [`Chain`]            |
//! | **Composition** | Run a supplier, then apply a transform to its value.         | [`AndThen`]                         |
//! | **Adaptation**  | Checked-to-unchecked widening that keeps fault identity.     | [`Unchecked`], [`downcast_fault`]   |
//! | **Observation** | Hook into invocation lifecycle (opt-in decorator).           | [`Observe`], [`Observed`], [`InvokeEvent`] |
//! | **Errors**      | Default fault type for callers without a domain error.       | [`SupplyError`]                     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use fallibles::{Supply, SupplyError, SupplyFn};
//!
//! fn main() -> Result<(), SupplyError> {
//!     // A supplier is any `Fn() -> Result<T, E>`; SupplyFn adds a stable name.
//!     let ten = SupplyFn::new("ten", || Ok::<i32, SupplyError>(10));
//!
//!     // Composition is strictly sequential: `ten` completes fully before
//!     // the transform runs, and faults from either step pass through as-is.
//!     let doubled = ten.and_then(|x: i32| Ok::<i32, SupplyError>(x * 2));
//!     assert_eq!(doubled.get()?, 20);
//!     Ok(())
//! }
//! ```

mod error;
mod observe;
mod supply;
mod transform;

// ---- Public re-exports ----

pub use error::SupplyError;
pub use observe::{InvokeEvent, InvokeKind, Observe, Observed};
pub use supply::{downcast_fault, AndThen, Supply, SupplyFn, SupplyRef, Unchecked};
pub use transform::{Chain, Transform};

// Optional: expose a simple built-in println observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observe::LogWriter;

//! # Supplier abstractions.
//!
//! This module provides the core supplier-related types:
//! - [`Supply`] - trait for zero-argument fallible operations
//! - [`SupplyFn`] - named, closure-backed supplier implementation
//! - [`SupplyRef`] - shared reference to a supplier (`Arc<dyn Supply>`)
//! - [`AndThen`] - sequential supplier-then-transform composition
//! - [`Unchecked`] - checked-to-unchecked fault adaptation
//!
//! ## Quick wiring
//! ```text
//! || -> Result<T, E>  ──or──  SupplyFn::new(name, f)
//!          └─► Supply::get()
//!               ├─► and_then(transform)  ─► AndThen (same fault type, verbatim)
//!               ├─► unchecked()          ─► Unchecked (Err(e) → panic carrying e)
//!               └─► shared()             ─► SupplyRef
//! ```

mod and_then;
mod supplier;
mod supply_fn;
mod unchecked;

pub use and_then::AndThen;
pub use supplier::{Supply, SupplyRef};
pub use supply_fn::SupplyFn;
pub use unchecked::{downcast_fault, Unchecked};

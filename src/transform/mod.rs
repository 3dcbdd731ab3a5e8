//! # Transform abstractions.
//!
//! This module provides the single-argument counterpart of
//! [`Supply`](crate::Supply):
//! - [`Transform`] - trait for one-argument fallible operations
//! - [`Chain`] - sequential transform-then-transform composition
//!
//! A transform is what [`Supply::and_then`](crate::Supply::and_then) consumes;
//! it shares the supplier's fault type, so faults cross a composition without
//! translation.

mod chain;
mod transformer;

pub use chain::Chain;
pub use transformer::Transform;

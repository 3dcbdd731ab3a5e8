//! # Invocation observability.
//!
//! This module groups the event **data model** and the hooks used to watch
//! supplier invocations:
//! - [`InvokeKind`], [`InvokeEvent`] - event classification and payload metadata
//! - [`Observe`] - observer trait for plugging in custom handlers
//! - [`Observed`] - decorator that reports invocations of a wrapped supplier
//!
//! Observation is strictly opt-in: the core combinators never log or publish
//! anything. An [`Observed`] wrapper calls the observer inline, on the
//! invoking thread, and returns the inner result untouched.

mod event;
mod observed;
mod observer;

pub use event::{InvokeEvent, InvokeKind};
pub use observed::Observed;
pub use observer::Observe;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;

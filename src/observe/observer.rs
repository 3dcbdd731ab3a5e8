//! # Invocation observer trait.
//!
//! Provides [`Observe`], an extension point for plugging custom handlers into
//! an [`Observed`](crate::Observed) supplier.
//!
//! ## Rules
//! - Observers are called inline on the invoking thread; keep handlers cheap.
//! - Observers see a rendering of the fault, never the fault value itself;
//!   they cannot alter the result of the operation they watch.
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! use fallibles::{InvokeEvent, InvokeKind, Observe};
//!
//! #[derive(Default)]
//! struct FaultCounter(AtomicU64);
//!
//! impl Observe for FaultCounter {
//!     fn on_event(&self, ev: &InvokeEvent) {
//!         if matches!(ev.kind, InvokeKind::Faulted) {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "fault-counter" }
//! }
//! ```

use crate::observe::event::InvokeEvent;

/// Observer of supplier invocations.
pub trait Observe: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called inline, on the thread that invoked the operation, in event
    /// order.
    fn on_event(&self, event: &InvokeEvent);

    /// Returns the observer name used in logs/metrics.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit"). The
    /// default uses `type_name::<Self>()`, which can be verbose - override it
    /// when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

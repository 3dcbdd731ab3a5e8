//! # Observed supplier decorator.
//!
//! [`Observed`] wraps a supplier and reports each invocation to an
//! [`Observe`] handler: [`InvokeKind::Invoking`] before the inner operation
//! runs, then [`InvokeKind::Produced`] or [`InvokeKind::Faulted`] depending on
//! the outcome.
//!
//! The decorator is purely additive. The inner result - value or fault - is
//! returned exactly as produced; the observer only ever sees a rendered copy
//! of the fault.

use std::fmt::Display;
use std::sync::Arc;

use crate::observe::event::{InvokeEvent, InvokeKind};
use crate::observe::observer::Observe;
use crate::supply::Supply;

/// Supplier that reports its invocations to an observer.
///
/// Built via [`Supply::observed`](crate::Supply::observed).
///
/// # Example
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use fallibles::{InvokeEvent, Observe, Supply, SupplyError, SupplyFn};
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<InvokeEvent>>);
///
/// impl Observe for Recorder {
///     fn on_event(&self, ev: &InvokeEvent) {
///         self.0.lock().unwrap().push(ev.clone());
///     }
/// }
///
/// let recorder = Arc::new(Recorder::default());
/// let watched = SupplyFn::new("answer", || Ok::<i32, SupplyError>(42))
///     .observed(recorder.clone());
///
/// assert_eq!(watched.get().unwrap(), 42);
/// assert_eq!(recorder.0.lock().unwrap().len(), 2); // Invoking + Produced
/// ```
pub struct Observed<S> {
    inner: S,
    observer: Arc<dyn Observe>,
}

impl<S> Observed<S> {
    pub(crate) fn new(inner: S, observer: Arc<dyn Observe>) -> Self {
        Self { inner, observer }
    }
}

impl<S> Supply for Observed<S>
where
    S: Supply,
    S::Fault: Display,
{
    type Item = S::Item;
    type Fault = S::Fault;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn get(&self) -> Result<Self::Item, Self::Fault> {
        self.observer
            .on_event(&InvokeEvent::new(InvokeKind::Invoking).with_op(self.inner.name()));

        match self.inner.get() {
            Ok(value) => {
                self.observer
                    .on_event(&InvokeEvent::new(InvokeKind::Produced).with_op(self.inner.name()));
                Ok(value)
            }
            Err(fault) => {
                self.observer.on_event(
                    &InvokeEvent::new(InvokeKind::Faulted)
                        .with_op(self.inner.name())
                        .with_fault(fault.to_string()),
                );
                Err(fault)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use crate::error::SupplyError;
    use crate::observe::event::{InvokeEvent, InvokeKind};
    use crate::observe::observer::Observe;
    use crate::supply::{Supply, SupplyFn};

    #[derive(Default)]
    struct Recorder(Mutex<Vec<InvokeEvent>>);

    impl Observe for Recorder {
        fn on_event(&self, event: &InvokeEvent) {
            self.0.lock().unwrap().push(event.clone());
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    #[test]
    fn test_success_emits_invoking_then_produced() {
        let recorder = Arc::new(Recorder::default());
        let watched = SupplyFn::new("answer", || Ok::<i32, SupplyError>(42))
            .observed(recorder.clone());

        assert_eq!(watched.get().unwrap(), 42);

        let events = recorder.0.lock().unwrap();
        let kinds: Vec<_> = events.iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![InvokeKind::Invoking, InvokeKind::Produced]);
        assert!(events[0].seq < events[1].seq);
        assert_eq!(events[0].op.as_deref(), Some("answer"));
    }

    #[test]
    fn test_fault_emits_faulted_with_rendering_and_propagates() {
        let recorder = Arc::new(Recorder::default());
        let watched = SupplyFn::new("boom", || {
            Err::<i32, SupplyError>(SupplyError::Fail { error: "nope".into() })
        })
        .observed(recorder.clone());

        let fault = watched.get().unwrap_err();
        assert_eq!(fault.as_label(), "supply_failed");

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.last().unwrap().kind, InvokeKind::Faulted);
        assert_eq!(
            events.last().unwrap().fault.as_deref(),
            Some("supply failed: nope")
        );
    }

    #[test]
    fn test_invoking_is_emitted_before_inner_runs() {
        let recorder = Arc::new(Recorder::default());
        let probe = recorder.clone();
        let watched = SupplyFn::new("probe", move || {
            let seen = probe.0.lock().unwrap();
            assert_eq!(seen.len(), 1, "Invoking must precede the inner operation");
            assert_eq!(seen[0].kind, InvokeKind::Invoking);
            Ok::<(), SupplyError>(())
        })
        .observed(recorder.clone());

        watched.get().unwrap();
    }

    #[test]
    fn test_observed_keeps_inner_name() {
        let recorder = Arc::new(Recorder::default());
        let watched =
            SupplyFn::new("named", || Ok::<(), SupplyError>(())).observed(recorder);
        assert_eq!(watched.name(), "named");
    }
}

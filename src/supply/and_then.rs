//! # Sequential supplier-then-transform composition.
//!
//! [`AndThen`] is the operation returned by
//! [`Supply::and_then`](crate::Supply::and_then). Invocation order is strict:
//! the inner supplier runs to completion first; only when it produces a value
//! does the transform run, on the same thread.
//!
//! Faults pass through verbatim from whichever step raised them. The
//! composition adds no translation, no wrapping, and no extra context.

use crate::supply::supplier::Supply;
use crate::transform::Transform;

/// Supplier that runs an inner supplier, then applies a transform.
///
/// Built via [`Supply::and_then`](crate::Supply::and_then). The transform
/// shares the inner supplier's fault type, so a fault observed by the caller
/// is exactly the value raised by whichever step failed.
pub struct AndThen<S, F> {
    supply: S,
    transform: F,
}

impl<S, F> AndThen<S, F> {
    pub(crate) fn new(supply: S, transform: F) -> Self {
        Self { supply, transform }
    }
}

impl<S, F> Supply for AndThen<S, F>
where
    S: Supply,
    F: Transform<S::Item, Fault = S::Fault>,
{
    type Item = F::Output;
    type Fault = S::Fault;

    fn name(&self) -> &str {
        self.supply.name()
    }

    fn get(&self) -> Result<Self::Item, Self::Fault> {
        let produced = self.supply.get()?;
        self.transform.apply(produced)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use crate::supply::supplier::Supply;
    use crate::supply::supply_fn::SupplyFn;

    #[derive(Debug, PartialEq)]
    struct Boom(&'static str);

    #[test]
    fn test_composition_applies_transform_to_produced_value() {
        let s = SupplyFn::new("ten", || Ok::<i32, Boom>(10));
        let composed = s.and_then(|x: i32| Ok::<i32, Boom>(x * 2));
        assert_eq!(composed.get().unwrap(), 20);
    }

    #[test]
    fn test_supplier_fault_short_circuits_and_skips_transform() {
        let invoked = Arc::new(AtomicBool::new(false));
        let seen = invoked.clone();

        let s = SupplyFn::new("boom", || Err::<i32, Boom>(Boom("production")));
        let composed = s.and_then(move |x: i32| {
            seen.store(true, Ordering::SeqCst);
            Ok::<i32, Boom>(x)
        });

        assert_eq!(composed.get().unwrap_err(), Boom("production"));
        assert!(
            !invoked.load(Ordering::SeqCst),
            "transform must not run when the supplier faults"
        );
    }

    #[test]
    fn test_transform_fault_propagates_verbatim() {
        let s = SupplyFn::new("ten", || Ok::<i32, Boom>(10));
        let composed = s.and_then(|_x: i32| Err::<i32, Boom>(Boom("transform")));
        assert_eq!(composed.get().unwrap_err(), Boom("transform"));
    }

    #[test]
    fn test_supplier_completes_before_transform_runs() {
        let order = Arc::new(Mutex::new(Vec::new()));

        let log = order.clone();
        let s = SupplyFn::new("ordered", move || {
            log.lock().unwrap().push("supply");
            Ok::<i32, Boom>(1)
        });

        let log = order.clone();
        let composed = s.and_then(move |x: i32| {
            log.lock().unwrap().push("transform");
            Ok::<i32, Boom>(x)
        });

        composed.get().unwrap();
        assert_eq!(*order.lock().unwrap(), vec!["supply", "transform"]);
    }

    #[test]
    fn test_composed_chains_stay_composable() {
        let s = SupplyFn::new("one", || Ok::<i32, Boom>(1));
        let composed = s
            .and_then(|x: i32| Ok::<i32, Boom>(x + 1))
            .and_then(|x: i32| Ok::<i32, Boom>(x * 10));
        assert_eq!(composed.get().unwrap(), 20);
        assert_eq!(composed.name(), "one");
    }
}

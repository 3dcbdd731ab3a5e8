//! # Sequential transform composition.
//!
//! [`Chain`] is the operation returned by
//! [`Transform::chain`](crate::Transform::chain): the first transform runs to
//! completion, then the second receives its output. Faults pass through
//! verbatim from whichever step raised them.

use crate::transform::transformer::Transform;

/// Transform that applies two transforms in sequence.
///
/// Built via [`Transform::chain`](crate::Transform::chain). Both steps share
/// one fault type.
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<I, A, B> Transform<I> for Chain<A, B>
where
    A: Transform<I>,
    B: Transform<A::Output, Fault = A::Fault>,
{
    type Output = B::Output;
    type Fault = A::Fault;

    fn apply(&self, input: I) -> Result<Self::Output, Self::Fault> {
        let mid = self.first.apply(input)?;
        self.second.apply(mid)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    use crate::transform::transformer::Transform;

    #[derive(Debug, PartialEq)]
    struct Boom(&'static str);

    #[test]
    fn test_chain_feeds_first_output_into_second() {
        let double = |x: i32| Ok::<i32, Boom>(x * 2);
        let stringify = |x: i32| Ok::<String, Boom>(format!("v{x}"));
        assert_eq!(double.chain(stringify).apply(21).unwrap(), "v42");
    }

    #[test]
    fn test_first_fault_short_circuits_second() {
        let invoked = Arc::new(AtomicBool::new(false));
        let seen = invoked.clone();

        let first = |_x: i32| Err::<i32, Boom>(Boom("first"));
        let second = move |x: i32| {
            seen.store(true, Ordering::SeqCst);
            Ok::<i32, Boom>(x)
        };

        assert_eq!(first.chain(second).apply(1).unwrap_err(), Boom("first"));
        assert!(
            !invoked.load(Ordering::SeqCst),
            "second transform must not run after a fault"
        );
    }

    #[test]
    fn test_second_fault_propagates_verbatim() {
        let first = |x: i32| Ok::<i32, Boom>(x);
        let second = |_x: i32| Err::<i32, Boom>(Boom("second"));
        assert_eq!(first.chain(second).apply(1).unwrap_err(), Boom("second"));
    }
}

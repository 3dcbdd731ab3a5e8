//! Bridging a checked supplier into a callback slot that declares no failures.
//!
//! The adapted operation re-raises faults by unwinding, carrying the original
//! fault value as the payload; the caller on the far side of the boundary can
//! still recover the typed fault.
//!
//! Run with: `cargo run --example unchecked_bridge`

use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use fallibles::{downcast_fault, Supply, SupplyFn};

/// A plain callback slot: knows nothing about failure channels.
fn run_plain(job: impl Fn() -> u64) -> u64 {
    job()
}

fn main() {
    let healthy = SupplyFn::new("healthy", || Ok::<u64, anyhow::Error>(41));
    println!("healthy path: {}", run_plain(healthy.unchecked().into_fn()) + 1);

    let broken = SupplyFn::new("broken", || {
        Err::<u64, anyhow::Error>(anyhow!("backend offline"))
    });
    let adapted = broken.unchecked();

    let payload =
        panic::catch_unwind(AssertUnwindSafe(|| run_plain(adapted.into_fn()))).unwrap_err();

    // Same fault value that the supplier raised, not a rendering of it.
    let fault = downcast_fault::<anyhow::Error>(payload).expect("original fault type");
    println!("recovered fault: {fault:#}");
}

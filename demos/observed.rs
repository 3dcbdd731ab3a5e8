//! Watching supplier invocations with the built-in `LogWriter`.
//!
//! Run with: `cargo run --example observed --features logging`

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use fallibles::{LogWriter, Supply, SupplyFn};

fn main() {
    let calls = Arc::new(AtomicU32::new(0));
    let flaky = SupplyFn::new("flaky-fetch", move || {
        if calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(anyhow!("connection refused"))
        } else {
            Ok("payload".to_string())
        }
    });

    let watched = flaky.observed(Arc::new(LogWriter));

    if watched.get().is_err() {
        println!("first attempt faulted, invoking again");
    }
    println!(
        "second attempt: {}",
        watched.get().expect("second attempt succeeds")
    );
}

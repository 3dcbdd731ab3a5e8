use crate::observe::event::{InvokeEvent, InvokeKind};
use crate::observe::observer::Observe;

/// Base observer that logs events to stdout.
///
/// Enabled via the `logging` feature. Useful for demos and debugging.
pub struct LogWriter;

impl Observe for LogWriter {
    fn on_event(&self, e: &InvokeEvent) {
        match e.kind {
            InvokeKind::Invoking => {
                if let Some(op) = &e.op {
                    println!("[invoking] op={op} seq={}", e.seq);
                }
            }
            InvokeKind::Produced => {
                println!("[produced] op={:?} seq={}", e.op, e.seq);
            }
            InvokeKind::Faulted => {
                println!("[faulted] op={:?} fault={:?} seq={}", e.op, e.fault, e.seq);
            }
        }
    }

    fn name(&self) -> &'static str {
        "log-writer"
    }
}

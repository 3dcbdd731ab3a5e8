//! Composing a supplier with a chain of transforms into a small pipeline.
//!
//! Run with: `cargo run --example pipeline`

use anyhow::{anyhow, Result};
use fallibles::{Supply, SupplyFn, Transform};

fn main() -> Result<()> {
    // The producer. Heterogeneous faults unify under one carrier (anyhow),
    // so every step of the pipeline shares a single fault channel.
    let raw = SupplyFn::new("raw-config", || -> Result<String> {
        Ok("  8080  ".to_string())
    });

    let parse = |text: String| -> Result<u16> {
        text.trim()
            .parse::<u16>()
            .map_err(|e| anyhow!("bad port: {e}"))
    };

    let validate = |port: u16| -> Result<u16> {
        if port >= 1024 {
            Ok(port)
        } else {
            Err(anyhow!("port {port} is reserved"))
        }
    };

    // raw runs fully first; a fault anywhere short-circuits the rest.
    let port = raw.and_then(parse.chain(validate));

    println!("listening on port {}", port.get()?);
    Ok(())
}

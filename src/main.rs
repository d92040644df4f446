//! Demo binary for the calculator.
//!
//! Command-line arguments are accepted and ignored. Output goes to stdout;
//! log events go to stderr and are filtered by `RUST_LOG` (default `warn`).
//! Logging problems are reported on stderr and never stop the demo.

use std::io;

use anyhow::{Context, Result};
use tracing::debug;

use calculator::{init_logging, Calculator, Demo, LogConfig};

fn main() -> Result<()> {
    if let Err(e) = init_logging(&LogConfig::from_env()) {
        eprintln!("warning: {}", e);
    }

    let ignored = std::env::args().skip(1).count();
    if ignored > 0 {
        debug!(count = ignored, "ignoring command-line arguments");
    }

    let demo = Demo::new(Calculator::new());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    demo.run(&mut out).context("failed to write demo output")?;

    Ok(())
}

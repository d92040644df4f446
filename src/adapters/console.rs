//! # Console Adapter
//!
//! The demo runner: a fixed script that drives an `Arithmetic` engine and
//! writes the results as text lines.
//!
//! ```text
//! === Calculator Application ===
//! Demo mode
//! 5 + 3 = 8.0
//! 10 - 4 = 6.0
//! Calculator works!
//! ```

use std::io::{self, Write};

use tracing::{debug, info};

use crate::core::number::format_double;
use crate::core::Operation;
use crate::error::{CalcError, CalcResult};
use crate::ports::Arithmetic;

/// First line of the demo output
pub const BANNER: &str = "=== Calculator Application ===";

/// Second line of the demo output
pub const MODE_LINE: &str = "Demo mode";

/// Last line of the demo output
pub const CLOSING_LINE: &str = "Calculator works!";

/// Build a result line such as `5 + 3 = 8.0`
///
/// Operand labels are written verbatim; only the result is formatted.
pub fn equation(lhs: &str, op: Operation, rhs: &str, result: f64) -> String {
    format!("{} {} {} = {}", lhs, op.symbol(), rhs, format_double(result))
}

/// Fixed-sequence demo over an arithmetic engine
pub struct Demo<A: Arithmetic> {
    engine: A,
}

impl<A: Arithmetic> Demo<A> {
    /// Wrap an engine
    pub fn new(engine: A) -> Self {
        Self { engine }
    }

    /// Get the wrapped engine
    pub fn engine(&self) -> &A {
        &self.engine
    }

    /// Write the five demo lines to `out` and flush it
    pub fn run<W: Write>(&self, out: &mut W) -> CalcResult<()> {
        writeln!(out, "{}", BANNER)?;
        writeln!(out, "{}", MODE_LINE)?;

        let sum = self.engine.add(5.0, 3.0);
        debug!(result = sum, "demo addition");
        writeln!(out, "{}", equation("5", Operation::Add, "3", sum))?;

        let difference = self.engine.subtract(10.0, 4.0);
        debug!(result = difference, "demo subtraction");
        writeln!(out, "{}", equation("10", Operation::Subtract, "4", difference))?;

        writeln!(out, "{}", CLOSING_LINE)?;
        out.flush()?;

        info!("demo finished");
        Ok(())
    }

    /// Run the demo into a `String`
    pub fn render(&self) -> CalcResult<String> {
        let mut buf = Vec::new();
        self.run(&mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| CalcError::Output(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

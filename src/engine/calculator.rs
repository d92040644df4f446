//! # Calculator Engine
//!
//! Stateless addition and subtraction over `f64`.
//!
//! Results follow IEEE-754 double arithmetic exactly: overflow goes to
//! infinity and NaN propagates. Nothing is intercepted or reported.

use tracing::trace;

use crate::ports::Arithmetic;

/// The arithmetic engine
///
/// Holds no state, so it is free to construct, copy and share.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    /// Create a new calculator
    pub fn new() -> Self {
        Self
    }

    /// Add two numbers
    pub fn add(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "add");
        a + b
    }

    /// Subtract `b` from `a`
    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        trace!(a, b, "subtract");
        a - b
    }
}

impl Arithmetic for Calculator {
    fn add(&self, a: f64, b: f64) -> f64 {
        Calculator::add(self, a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        Calculator::subtract(self, a, b)
    }
}

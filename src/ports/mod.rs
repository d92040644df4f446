//! # Ports
//!
//! Trait contracts between the engine and its callers.
//!
//! - `Arithmetic` - binary operations over `f64`
//!
//! The demo runner depends on this trait, not on a concrete engine.

/// Binary arithmetic over double-precision values
///
/// Implementations must be pure: the same operands always produce the same
/// result, and IEEE-754 special values pass through untouched.
pub trait Arithmetic {
    /// `a + b`
    fn add(&self, a: f64, b: f64) -> f64;

    /// `a - b`
    fn subtract(&self, a: f64, b: f64) -> f64;
}

impl<T: Arithmetic + ?Sized> Arithmetic for &T {
    fn add(&self, a: f64, b: f64) -> f64 {
        (**self).add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        (**self).subtract(a, b)
    }
}

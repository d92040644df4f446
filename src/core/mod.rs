//! # Core
//!
//! Pure domain types. No I/O, no logging.
//!
//! - `Operation` - the closed catalog of supported operations
//! - `number` - rendering of `f64` results for display

pub mod number;
mod operation;

pub use operation::Operation;

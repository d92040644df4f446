//! # Engine
//!
//! The arithmetic engine behind the `Arithmetic` port.

mod calculator;

pub use calculator::Calculator;

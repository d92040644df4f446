//! # Adapters
//!
//! Edges of the crate that touch the outside world.
//!
//! - Console: the demo runner, writing result lines to any `io::Write`

pub mod console;

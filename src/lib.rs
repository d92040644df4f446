//! # Calculator
//!
//! A minimal arithmetic calculator: addition and subtraction over `f64`,
//! a closed catalog of operation symbols, and a fixed-script demo runner.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CALCULATOR                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  CORE (pure, no I/O)                                        │
//! │    Operation, number formatting                             │
//! │                                                              │
//! │  PORTS (trait contracts)                                     │
//! │    Arithmetic                                               │
//! │                                                              │
//! │  ENGINE                                                      │
//! │    Calculator - stateless add / subtract                    │
//! │                                                              │
//! │  ADAPTERS                                                    │
//! │    Console: Demo runner                                     │
//! │                                                              │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use calculator::{Calculator, Demo, Operation};
//!
//! let calculator = Calculator::new();
//! assert_eq!(calculator.add(5.0, 3.0), 8.0);
//! assert_eq!(calculator.subtract(10.0, 4.0), 6.0);
//! assert_eq!(Operation::Add.symbol(), "+");
//!
//! let output = Demo::new(calculator).render().unwrap();
//! assert!(output.starts_with("=== Calculator Application ==="));
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Core domain - pure types, no I/O
/// Contains: Operation, number formatting
pub mod core;

/// Port definitions - trait contracts
/// Contains: Arithmetic trait
pub mod ports;

/// Engine - the arithmetic implementation
/// Contains: Calculator
pub mod engine;

/// Adapter implementations
/// Contains: console demo runner
pub mod adapters;

/// Logging configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// RE-EXPORTS (public API)
// ============================================================================

// Core types
pub use crate::core::Operation;
pub use crate::core::number::format_double;

// Port traits
pub use crate::ports::Arithmetic;

// Engine
pub use crate::engine::Calculator;

// Adapters
pub use crate::adapters::console::{equation, Demo};

// Config and errors
pub use crate::config::{init_logging, LogConfig};
pub use crate::error::{CalcError, CalcResult};

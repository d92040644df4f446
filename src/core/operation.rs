//! # Operation Catalog
//!
//! The closed set of operations the calculator knows about, each with a
//! fixed display symbol.
//!
//! The catalog is descriptive only: `Calculator` does not dispatch through it.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// A named arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition, `+`
    Add,
    /// Subtraction, `-`
    Subtract,
}

impl Operation {
    /// Every variant, in declaration order
    pub const ALL: [Operation; 2] = [Operation::Add, Operation::Subtract];

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
        }
    }

    /// Upper-case constant name
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "ADD",
            Operation::Subtract => "SUBTRACT",
        }
    }

    /// Look up a variant by its symbol. Surrounding whitespace is ignored.
    pub fn from_symbol(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|op| op.symbol() == s)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s).ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}

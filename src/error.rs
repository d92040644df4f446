//! # Errors
//!
//! Arithmetic itself never fails; errors come from parsing operation symbols,
//! writing output, and installing the log subscriber.

use thiserror::Error;

/// Errors produced by the calculator crate
#[derive(Debug, Error)]
pub enum CalcError {
    /// The input is not a symbol in the operation catalog
    #[error("Unknown operation symbol: {0:?}")]
    UnknownOperation(String),

    /// The output sink rejected a write
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// The global log subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result alias for calculator operations that can fail
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts() {
        let err: CalcError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, CalcError::Output(_)));
        assert_eq!(err.to_string(), "Output error: pipe closed");
    }

    #[test]
    fn test_unknown_operation_message() {
        let err = CalcError::UnknownOperation("*".to_string());
        assert_eq!(err.to_string(), "Unknown operation symbol: \"*\"");
    }
}

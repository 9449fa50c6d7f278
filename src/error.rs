//! Error types for the magic-square library.
//!
//! This module provides error handling using the `thiserror` crate, with
//! specific variants for input validation, unsolvable orders, and
//! construction dispatch.

use thiserror::Error;

/// The main error type for the magic-square library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Input Validation Errors ============
    /// An argument is zero, empty, or otherwise not a positive quantity.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Generation Errors ============
    /// The requested order has no magic square (only n = 2).
    #[error("no {n} x {n} magic square exists")]
    NoSolution {
        /// The unsolvable order.
        n: u32,
    },

    /// No construction method applies to the requested order.
    ///
    /// Defensive: with the closed order set this is only reachable if
    /// classification is extended without a matching constructor.
    #[error("no construction method applies to order {n}")]
    UnsupportedOrder {
        /// The unclassifiable order.
        n: u32,
    },

    /// A constructor was invoked with an order outside its congruence class.
    #[error("{algorithm} construction requires {requires}, got n = {n}")]
    OrderMismatch {
        /// The rejected order.
        n: u32,
        /// Name of the construction algorithm.
        algorithm: &'static str,
        /// Human-readable congruence requirement.
        requires: &'static str,
    },

    // ============ Dimension Errors ============
    /// A supplied grid is not square.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension description.
        expected: String,
        /// Actual dimension description.
        actual: String,
    },
}

/// A specialized `Result` type for magic-square operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoSolution { n: 2 };
        assert!(err.to_string().contains("2 x 2"));

        let err = Error::OrderMismatch {
            n: 4,
            algorithm: "Siamese",
            requires: "an odd order",
        };
        assert!(err.to_string().contains("Siamese"));
        assert!(err.to_string().contains("odd"));
        assert!(err.to_string().contains("4"));

        let err = Error::invalid_input("cell count must be at least 1");
        assert!(err.to_string().contains("cell count"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(Error::NoSolution { n: 2 }, Error::NoSolution { n: 2 });
        assert_ne!(Error::NoSolution { n: 2 }, Error::UnsupportedOrder { n: 2 });
    }
}

//! Error types for fixture generation and configuration.
//!
//! Extraction never fails through this type: a kind mismatch is reported as
//! `None` by the `get_all_*` family. These errors cover arguments that a
//! generator or builder cannot honour.

use thiserror::Error;

/// Fixture construction error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    /// Uniform generators need a strictly positive upper bound.
    #[error("Invalid modulus {modulus}: must be greater than zero")]
    InvalidModulus {
        /// The rejected modulus.
        modulus: i64,
    },

    /// The last value of a consecutive run does not fit the target type.
    #[error("Consecutive run of {count} values starting at {start} overflows {kind}")]
    ConsecutiveOverflow {
        /// First value of the requested run.
        start: i64,
        /// Requested number of values.
        count: usize,
        /// Name of the integer type that overflowed.
        kind: &'static str,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FixtureError::InvalidModulus { modulus: 0 };
        assert!(err.to_string().contains("Invalid modulus 0"));

        let err = FixtureError::ConsecutiveOverflow {
            start: i32::MAX as i64,
            count: 2,
            kind: "i32",
        };
        let msg = err.to_string();
        assert!(msg.contains("2147483647"));
        assert!(msg.contains("i32"));

        let err = FixtureError::InvalidConfig("initial_capacity too large".to_string());
        assert!(err.to_string().contains("initial_capacity"));
    }
}

//! Error type shared by the object-relationship demos.
//!
//! Every failure here is a recoverable condition reported back to the caller.

use thiserror::Error;

/// Result type alias for the demo library.
pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemoError {
    /// A bounded container has no room left.
    #[error("list is full (capacity {capacity})")]
    Full {
        /// Fixed capacity of the container
        capacity: usize,
    },

    /// Index outside of the valid `0..size` range.
    #[error("index {index} out of range for list of size {size}")]
    OutOfRange {
        /// Requested index
        index: usize,
        /// Number of stored elements at the time of the request
        size: usize,
    },

    /// An aggregated reference is required but absent.
    #[error("{owner} has no {dependency}")]
    MissingDependency {
        /// Who tried to use the dependency
        owner: String,
        /// What was missing
        dependency: &'static str,
    },

    /// Fuel amount that is not a finite number or exceeds the tank.
    #[error("invalid fuel amount {amount} (must be finite and at most {max})")]
    InvalidFuel {
        /// Requested amount, formatted
        amount: String,
        /// Largest accepted amount
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message() {
        let err = DemoError::Full { capacity: 10 };
        assert_eq!(err.to_string(), "list is full (capacity 10)");
    }

    #[test]
    fn test_out_of_range_message() {
        let err = DemoError::OutOfRange { index: 3, size: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for list of size 2");
    }

    #[test]
    fn test_missing_dependency_message() {
        let err = DemoError::MissingDependency {
            owner: "Billy".to_string(),
            dependency: "gun",
        };
        assert_eq!(err.to_string(), "Billy has no gun");
    }

    #[test]
    fn test_invalid_fuel_message() {
        let err = DemoError::InvalidFuel {
            amount: "inf".to_string(),
            max: 10000.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid fuel amount inf (must be finite and at most 10000)"
        );
    }
}

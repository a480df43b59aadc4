//! Compute primitives for search result operations
//!
//! This module provides the low-level building blocks used by the
//! search result model: residue scanning and pairwise alignment rows.

pub mod string_ops;
pub mod alignment;

/// Compute operation result type
pub type ComputeResult<T> = Result<T, ComputeError>;

/// Error types for compute operations
#[derive(Debug, thiserror::Error)]
pub enum ComputeError {
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    #[error("Computation error: {0}")]
    ComputationError(String),
}

/// Express `count` as a percentage of `total`
pub fn percentage(count: usize, total: usize) -> ComputeResult<f64> {
    if total == 0 {
        return Err(ComputeError::ComputationError(
            format!("cannot express {} as a percentage of zero", count)
        ));
    }

    Ok(count as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(90, 100).unwrap(), 90.0);
        assert_eq!(percentage(0, 7).unwrap(), 0.0);
        assert!((percentage(1, 3).unwrap() - 33.333333).abs() < 1e-5);
        assert!(matches!(percentage(3, 0), Err(ComputeError::ComputationError(_))));
    }

    #[test]
    fn test_error_messages() {
        let err = ComputeError::InvalidInput("rows differ".to_string());
        assert_eq!(err.to_string(), "Invalid input data: rows differ");

        let err = ComputeError::ComputationError("division by zero".to_string());
        assert_eq!(err.to_string(), "Computation error: division by zero");
    }
}

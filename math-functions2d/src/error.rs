//! Error types for benchmark function evaluation.
//!
//! Both conditions are contract violations on the caller's side: a point
//! array that is not two-dimensional, or a derivative requested from a
//! function that does not provide it. Neither is recoverable.

use std::fmt;
use thiserror::Error;

/// Evaluation routine of a [`TestFunction2D`](crate::TestFunction2D).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Scalar cost
    Cost,
    /// First derivatives
    Gradient,
    /// Second derivatives
    Hessian,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Cost => write!(f, "cost"),
            Operation::Gradient => write!(f, "gradient"),
            Operation::Hessian => write!(f, "hessian"),
        }
    }
}

/// Errors that can occur when evaluating a test function.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FunctionError {
    /// The leading axis of the point array is missing or its length is not 2.
    #[error("shape mismatch: expected a leading axis of length 2, got shape {shape:?}")]
    ShapeMismatch {
        /// Shape of the rejected array
        shape: Vec<usize>,
    },

    /// The function does not provide the requested operation.
    #[error("{function} does not implement the {operation}")]
    NotImplemented {
        /// Display name of the function
        function: &'static str,
        /// The unsupported operation
        operation: Operation,
    },
}

/// A specialized `Result` type for test function evaluation.
pub type Result<T> = std::result::Result<T, FunctionError>;

impl FunctionError {
    /// Returns `true` if the input array had the wrong shape.
    pub fn is_shape_error(&self) -> bool {
        matches!(self, FunctionError::ShapeMismatch { .. })
    }

    /// Returns `true` if an unsupported operation was requested.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, FunctionError::NotImplemented { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FunctionError::ShapeMismatch { shape: vec![3, 10] };
        assert_eq!(
            err.to_string(),
            "shape mismatch: expected a leading axis of length 2, got shape [3, 10]"
        );

        let err = FunctionError::NotImplemented {
            function: "Rastrigin Function",
            operation: Operation::Hessian,
        };
        assert_eq!(
            err.to_string(),
            "Rastrigin Function does not implement the hessian"
        );
    }

    #[test]
    fn test_error_categories() {
        let shape_err = FunctionError::ShapeMismatch { shape: vec![] };
        let grad_err = FunctionError::NotImplemented {
            function: "Trid Function",
            operation: Operation::Gradient,
        };

        assert!(shape_err.is_shape_error());
        assert!(!shape_err.is_not_implemented());
        assert!(grad_err.is_not_implemented());
        assert!(!grad_err.is_shape_error());
    }
}

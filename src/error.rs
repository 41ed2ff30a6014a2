//! Error types for matrix root computations

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Result type alias using [`RootInvError`]
pub type Result<T> = std::result::Result<T, RootInvError>;

/// Errors which abort a matrix root computation.
///
/// Non-convergence of the coupled Newton iteration is deliberately absent:
/// it is reported through [`crate::matrix_inverse_root_newton::NewtonConvergenceFlag`]
/// and never surfaces as an `Err`.
#[derive(Error, Debug)]
pub enum RootInvError {
    /// Root order is not a positive integer
    #[error("Root {root} should be positive!")]
    InvalidRoot {
        /// The offending root order
        root : i32,
    },

    /// Input is not a non-empty square 2-dimensional matrix, or the shapes
    /// of two compared matrices disagree
    #[error("Bad matrix shape: {reason}")]
    Shape {
        /// What was wrong with the shape
        reason : String,
    },

    /// Method selector does not name a known root inverse method
    #[error("Root inverse method is not implemented! Specified root inverse method is {method}.")]
    UnsupportedMethod {
        /// The offending selector, as given
        method : String,
    },

    /// Failure inside the LAPACK backend
    #[error("Linear algebra backend failure: {0}")]
    Linalg(#[from] LinalgError),
}

impl RootInvError {
    pub(crate) fn shape<S : Into<String>>(reason : S) -> RootInvError {
        RootInvError::Shape {
            reason : reason.into()
        }
    }
}

impl From<ndarray::ShapeError> for RootInvError {
    fn from(err : ndarray::ShapeError) -> RootInvError {
        RootInvError::shape(err.to_string())
    }
}

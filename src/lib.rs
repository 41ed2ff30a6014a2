//! Inverse p-th roots of symmetric positive semi-definite matrices, `X ~= A^{-1/p}`,
//! as needed by second-order (Shampoo-style) preconditioners.
//!
//! Two methods are available behind [`compute_inverse_root`]:
//! a symmetric eigendecomposition ([`matrix_root_eigen`]) and the coupled
//! inverse Newton iteration ([`matrix_inverse_root_newton`]).
//! [`compute_matrix_root_inverse_residuals`] audits a candidate root against a
//! double-precision reference.
//!
//! Running out of Newton iterations is a soft failure: the estimate is returned and
//! a warning goes to the [`log`] facade, or to a caller-supplied observer via
//! [`compute_inverse_root_with_observer`].

#![allow(unused_parens)]

#[macro_use] extern crate log;
pub mod error;
pub mod params;
pub mod root_scalar;
pub mod linalg_utils;
pub mod matrix_root_eigen;
pub mod matrix_inverse_root_newton;
pub mod matrix_inverse_root;
pub mod residuals;

#[cfg(test)]
pub mod test_utils;

pub use crate::error::{Result, RootInvError};
pub use crate::root_scalar::RootScalar;
pub use crate::matrix_root_eigen::{matrix_root_eigen, EigenRoot};
pub use crate::matrix_inverse_root_newton::{matrix_inverse_root_newton, NewtonConvergenceFlag, NewtonRoot};
pub use crate::matrix_inverse_root::{compute_inverse_root, compute_inverse_root_with_observer,
                                     RootInvConfig, RootInvMethod};
pub use crate::residuals::{compute_matrix_root_inverse_residuals, RootInverseResiduals};

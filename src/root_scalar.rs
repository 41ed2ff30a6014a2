extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::{LinalgScalar, ScalarOperand};
use ndarray_linalg::lapack::Lapack;
use ndarray_linalg::types::Scalar;

///Working precision for matrix root computations: a real, LAPACK-capable
///scalar which can be widened to `f64` for validation against a
///double-precision reference. Implemented for `f32` and `f64`.
pub trait RootScalar : Scalar<Real = Self> + Lapack + LinalgScalar + ScalarOperand
                       + PartialOrd + Into<f64> {
    ///Narrows a double-precision value into this precision.
    fn narrow(val : f64) -> Self;

    ///Widens this value to double precision.
    fn widen(self) -> f64 {
        self.into()
    }
}

impl RootScalar for f32 {
    fn narrow(val : f64) -> Self {
        val as f32
    }
}

impl RootScalar for f64 {
    fn narrow(val : f64) -> Self {
        val
    }
}

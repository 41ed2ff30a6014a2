extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use serde::{Serialize, Deserialize};
use crate::error::Result;
use crate::linalg_utils::*;
use crate::root_scalar::*;
use crate::matrix_root_eigen::*;

///Accuracy of a candidate matrix root inverse, measured in double precision.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RootInverseResiduals {
    ///`|X - X_hat|_inf / |X|_inf` against a double-precision eigendecomposition reference `X`
    pub relative_error : f64,
    ///`|X_hat^{-r} - A|_inf / |A|_inf`
    pub relative_residual : f64
}

///Computes the residuals of the candidate root inverse `x_hat` of `a` for debugging purposes:
///
///   relative error    = |X - X_hat|_inf / |X|_inf
///   relative residual = |X_hat^{-r} - A|_inf / |A|_inf
///
///where `X = (A + epsilon I)^{-1/r}` is recomputed from `a` in `f64`, and `|.|_inf` is
///the largest absolute entry. `x_hat` is widened to `f64` too. Neither input is modified.
pub fn compute_matrix_root_inverse_residuals<T, S1, S2, D1, D2>(a : &ArrayBase<S1, D1>,
                                                                 x_hat : &ArrayBase<S2, D2>,
                                                                 root : i32, epsilon : f64)
                                                                 -> Result<RootInverseResiduals>
    where T : RootScalar, S1 : Data<Elem = T>, S2 : Data<Elem = T>,
          D1 : Dimension, D2 : Dimension {

    check_square(a)?;
    check_same_shape(a, x_hat)?;

    let a_wide : Array2<f64> = a.view().into_dimensionality::<Ix2>()?.mapv(|elem| elem.widen());
    let x_hat_wide : Array2<f64> = x_hat.view().into_dimensionality::<Ix2>()?.mapv(|elem| elem.widen());

    let x = matrix_root_eigen(&a_wide, root, epsilon, true, true)?.root;
    let relative_error = dist_inf(&x, &x_hat_wide) / max_abs_entry(&x);

    let x_hat_inv = x_hat_wide.inv()?;
    let x_hat_invr = matrix_power(x_hat_inv.view(), root as usize);
    let relative_residual = dist_inf(&x_hat_invr, &a_wide) / max_abs_entry(&a_wide);

    debug!("Root inverse residuals: relative error {}, relative residual {}",
           relative_error, relative_residual);

    Ok(RootInverseResiduals {
        relative_error,
        relative_residual
    })
}

extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use ndarray_linalg::types::Scalar;
use crate::error::{Result, RootInvError};
use crate::linalg_utils::*;
use crate::root_scalar::*;

///How the coupled Newton iteration stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NewtonConvergenceFlag {
    ReachedMaxIters,
    Converged
}

///Result of [`matrix_inverse_root_newton`]. Everything the iteration ends with
///is exposed for diagnostics, even though most callers only want `root`.
#[derive(Clone, Debug)]
pub struct NewtonRoot<T> {
    ///Inverse root estimate
    pub root : Array2<T>,
    ///Coupled matrix `M`, which tends to the identity
    pub coupled : Array2<T>,
    pub termination : NewtonConvergenceFlag,
    pub iterations : usize,
    ///Final entrywise distance between `M` and the identity
    pub error : T
}

impl<T> NewtonRoot<T> {
    pub fn converged(&self) -> bool {
        self.termination == NewtonConvergenceFlag::Converged
    }
}

///Computes the inverse root of a symmetric positive definite matrix using the
///coupled inverse Newton iteration:
///
///   alpha <- -1 / p
///   X <- 1/c * I
///   M <- 1/c^p * A
///   repeat until convergence
///       M' <- (1 - alpha) * I + alpha * M
///       X <- X * M'
///       M <- M'^p * M
///
///where c = (2 |A|_F / (p + 1))^{1/p}, so that |A|_2 <= |A|_F < (p + 1) c^p.
///This is implemented with z = 1 / c^p = (p + 1) / (2 |A|_F).
///
///`epsilon * I` is added to `a` in place before iterating, so the caller observes
///the regularized matrix afterwards. Copy first if the original is still needed.
///
///Hitting `max_iterations` is not an error: the current estimate is returned
///with [`NewtonConvergenceFlag::ReachedMaxIters`].
pub fn matrix_inverse_root_newton<T, S>(a : &mut ArrayBase<S, Ix2>, root : i32, epsilon : T,
                                        max_iterations : usize, tolerance : T)
                                        -> Result<NewtonRoot<T>>
    where T : RootScalar, S : DataMut<Elem = T> {

    if (root <= 0) {
        return Err(RootInvError::InvalidRoot { root });
    }
    let dim = check_square(&*a)?;
    let power = root as usize;

    let alpha = -(T::one() / T::narrow(root as f64));
    let identity = Array2::<T>::eye(dim);

    a.diag_mut().mapv_inplace(|diag_elem| diag_elem + epsilon);

    let a_norm = a.opnorm_fro()?;
    let z = T::narrow(root as f64 + 1.0) / (T::narrow(2.0) * a_norm);
    let mut x = &identity * Scalar::powf(&z, -alpha);
    let mut m = a.mapv(|elem| elem * z);
    let mut error = dist_inf(&m, &identity);
    let mut iteration = 0;

    while (error > tolerance && iteration < max_iterations) {
        iteration += 1;
        let m_p = m.mapv(|elem| elem * alpha) + &(&identity * (T::one() - alpha));
        x = x.dot(&m_p);
        m = matrix_power(m_p.view(), power).dot(&m);
        error = dist_inf(&m, &identity);
        trace!("Newton iteration {}: |M - I|_inf = {}", iteration, error);
    }

    let termination = if (error <= tolerance) {
        NewtonConvergenceFlag::Converged
    } else {
        NewtonConvergenceFlag::ReachedMaxIters
    };
    debug!("Newton iteration stopped after {} iterations with error {} ({:?})",
           iteration, error, termination);

    Ok(NewtonRoot {
        root : x,
        coupled : m,
        termination,
        iterations : iteration,
        error
    })
}

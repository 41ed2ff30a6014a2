extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::types::Scalar;
use crate::error::{Result, RootInvError};
use crate::root_scalar::*;

use std::ops::MulAssign;

///Scales the columns of `a` by the respective scaling factors in `b`. Useful
///for efficiently computing right-multiplication by a diagonal matrix.
pub fn scale_columns<T : RootScalar>(a : ArrayView2<T>, b : ArrayView1<T>) -> Array2<T> {
    let mut result = a.to_owned();
    let n = a.shape()[1];
    for j in 0..n {
        let scale = b[[j,]];
        let mut column = result.column_mut(j);
        column.mul_assign(scale);
    }
    result
}

///Largest absolute entry of `a`, or NaN if any entry is NaN. Zero for an empty array.
pub fn max_abs_entry<T, S, D>(a : &ArrayBase<S, D>) -> T
    where T : RootScalar, S : Data<Elem = T>, D : Dimension {
    a.fold(T::zero(), |acc, elem| {
        let abs_elem = Scalar::abs(elem);
        if (acc.widen().is_nan() || abs_elem <= acc) {
            acc
        } else {
            abs_elem
        }
    })
}

///Entrywise infinity-norm distance `max |a - b|` between two arrays of the same shape.
pub fn dist_inf<T, S1, S2, D>(a : &ArrayBase<S1, D>, b : &ArrayBase<S2, D>) -> T
    where T : RootScalar, S1 : Data<Elem = T>, S2 : Data<Elem = T>, D : Dimension {
    let diff = a - b;
    max_abs_entry(&diff)
}

///Computes `a^n` by repeated squaring. `a^0` is the identity.
pub fn matrix_power<T : RootScalar>(a : ArrayView2<T>, n : usize) -> Array2<T> {
    let dim = a.shape()[0];
    let mut result = Array2::<T>::eye(dim);
    let mut base = a.to_owned();
    let mut remaining = n;
    while (remaining > 0) {
        if (remaining & 1 == 1) {
            result = result.dot(&base);
        }
        remaining >>= 1;
        if (remaining > 0) {
            base = base.dot(&base);
        }
    }
    result
}

///Checks that `a` is a non-empty square 2-dimensional matrix,
///returning its dimension.
pub fn check_square<S, D>(a : &ArrayBase<S, D>) -> Result<usize>
    where S : RawData, D : Dimension {
    let shape = a.shape();
    if (shape.len() != 2) {
        return Err(RootInvError::shape(
            format!("Matrix is not 2-dimensional! Got shape {:?}", shape)));
    }
    if (shape[0] != shape[1]) {
        return Err(RootInvError::shape(
            format!("Matrix is not square! Got shape {:?}", shape)));
    }
    if (shape[0] == 0) {
        return Err(RootInvError::shape("Matrix is empty!"));
    }
    Ok(shape[0])
}

///Checks that `a` and `b` have identical shapes.
pub fn check_same_shape<S1, S2, D1, D2>(a : &ArrayBase<S1, D1>, b : &ArrayBase<S2, D2>) -> Result<()>
    where S1 : RawData, S2 : RawData, D1 : Dimension, D2 : Dimension {
    if (a.shape() != b.shape()) {
        return Err(RootInvError::shape(
            format!("Matrix shapes do not match! {:?} vs {:?}", a.shape(), b.shape())));
    }
    Ok(())
}

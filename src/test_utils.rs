extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use crate::params::*;
use ndarray_linalg::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;

pub fn assert_equal_matrices(one : &Array2<f64>, two : &Array2<f64>) {
    assert_equal_matrices_to_within(one, two, ZEROING_THRESH);
}
pub fn assert_equal_matrices_to_within(one : &Array2<f64>, two : &Array2<f64>, within : f64) {
    let diff = one - two;
    let frob_norm = diff.opnorm_fro().unwrap();
    if (!(frob_norm <= within)) {
        println!("{}", one);
        println!("!=");
        println!("{}", two);
        panic!("Frobenius distance {} exceeds {}", frob_norm, within);
    }
}
pub fn assert_no_nans(mat : &Array2<f64>) {
    for elem in mat.iter() {
        if (!elem.is_finite()) {
            panic!("Non-finite entry in {}", mat);
        }
    }
}
pub fn random_matrix(t : usize, s : usize) -> Array2<f64> {
    Array::random((t, s), StandardNormal)
}
pub fn random_vector(t : usize) -> Array1<f64> {
    Array::random((t,), StandardNormal)
}
pub fn diag_matrix(diag : &Array1<f64>) -> Array2<f64> {
    let t = diag.shape()[0];
    let mut result = Array::zeros((t, t));
    for i in 0..t {
        result[[i, i]] = diag[[i,]];
    }
    result
}
///Random symmetric positive definite matrix, shifted away from singularity.
pub fn random_psd_matrix(t : usize) -> Array2<f64> {
    let sqrt = random_matrix(t, t);
    let mut result = sqrt.t().dot(&sqrt);
    result /= t as f64;
    for i in 0..t {
        result[[i, i]] += 1.0;
    }
    result
}
///Random symmetric matrix with prescribed eigenvalues.
pub fn random_matrix_with_eigenvalues(eigenvalues : &Array1<f64>) -> Array2<f64> {
    let t = eigenvalues.shape()[0];
    let (q, _) = random_matrix(t, t).qr().unwrap();
    let scaled = q.dot(&diag_matrix(eigenvalues));
    let mut result = scaled.dot(&q.t());
    let symmetrized = (&result + &result.t()) * 0.5;
    result.assign(&symmetrized);
    result
}

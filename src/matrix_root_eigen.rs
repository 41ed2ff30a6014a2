extern crate ndarray;
extern crate ndarray_linalg;

use ndarray::*;
use ndarray_linalg::*;
use ndarray_linalg::types::Scalar;
use crate::error::{Result, RootInvError};
use crate::linalg_utils::*;
use crate::root_scalar::*;

///Result of [`matrix_root_eigen`]: the (inverse) root together with the
///eigendecomposition it was reconstructed from.
#[derive(Clone, Debug)]
pub struct EigenRoot<T, D : Dimension> {
    ///(Inverse) root of the matrix, same shape as the input
    pub root : Array<T, D>,
    ///Eigenvalues in ascending order, after the positive semi-definite
    ///correction and the epsilon shift have been applied
    pub eigenvalues : Array1<T>,
    ///Orthogonal matrix whose columns are the eigenvectors
    pub eigenvectors : Array2<T>
}

///Computes the matrix (inverse) root of a symmetric matrix via its eigendecomposition:
///
///   A = Q L Q^T  =>  A^{1/r} = Q L^{1/r} Q^T  or  A^{-1/r} = Q L^{-1/r} Q^T
///
///Only the lower triangle of `a` is read, so symmetry is assumed rather than checked.
///If `make_positive_semidefinite` is set, all eigenvalues are shifted up by the magnitude
///of the most negative one (if any), after which `epsilon` is added to every eigenvalue.
///
///Scalars (0-dimensional arrays, or 1-dimensional arrays holding a single element)
///skip the decomposition entirely and are raised to the power directly, without the
///correction or the epsilon shift. A 1x1 matrix is still decomposed, so it gets both.
pub fn matrix_root_eigen<T, S, D>(a : &ArrayBase<S, D>, root : i32, epsilon : T,
                                  inverse : bool, make_positive_semidefinite : bool)
                                  -> Result<EigenRoot<T, D>>
    where T : RootScalar, S : Data<Elem = T>, D : Dimension {

    if (root <= 0) {
        return Err(RootInvError::InvalidRoot { root });
    }

    let mut alpha = T::one() / T::narrow(root as f64);
    if (inverse) {
        alpha = -alpha;
    }

    if (a.ndim() == 0 || (a.ndim() == 1 && a.len() == 1)) {
        let root_matrix = a.mapv(|x| Scalar::powf(&x, alpha));
        let eigenvalues = a.iter().cloned().collect::<Array1<T>>();
        return Ok(EigenRoot {
            root : root_matrix,
            eigenvalues,
            eigenvectors : Array2::ones((1, 1))
        });
    }

    check_square(a)?;
    let square = a.view().into_dimensionality::<Ix2>()?;

    let (mut eigenvalues, eigenvectors) = square.eigh(UPLO::Lower)?;

    if (make_positive_semidefinite) {
        let lambda_min = eigenvalues.fold(T::zero(), |acc, lambda| {
            if (*lambda < acc) { *lambda } else { acc }
        });
        if (lambda_min < T::zero()) {
            debug!("Shifting spectrum by {} to make matrix positive semi-definite", -lambda_min);
            eigenvalues.mapv_inplace(|lambda| lambda - lambda_min);
        }
    }

    eigenvalues.mapv_inplace(|lambda| lambda + epsilon);

    let powered = eigenvalues.mapv(|lambda| Scalar::powf(&lambda, alpha));
    let root_matrix = scale_columns(eigenvectors.view(), powered.view()).dot(&eigenvectors.t());

    Ok(EigenRoot {
        root : root_matrix.into_dimensionality::<D>()?,
        eigenvalues,
        eigenvectors
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn inverse_first_root_of_identity_is_identity() {
        let identity = Array2::<f64>::eye(6);
        let result = matrix_root_eigen(&identity, 1, 0.0, true, true).unwrap();
        assert_equal_matrices(&result.root, &identity);
    }

    #[test]
    fn inverse_square_root_of_scaled_identity() {
        let a = arr2(&[[2.0f64, 0.0], [0.0, 2.0]]);
        let result = matrix_root_eigen(&a, 2, 0.0, true, true).unwrap();
        let expected = Array2::<f64>::eye(2) * (1.0 / 2.0f64.sqrt());
        assert_equal_matrices(&result.root, &expected);
    }

    #[test]
    fn single_element_vector_bypasses_decomposition() {
        let a = arr1(&[4.0f64]);
        let result = matrix_root_eigen(&a, 2, 0.0, true, true).unwrap();
        assert_eq!(result.root.shape(), &[1]);
        assert!((result.root[0] - 0.5).abs() < 1e-12);
        assert_eq!(result.eigenvectors[[0, 0]], 1.0);
    }

    #[test]
    fn one_by_one_matrix_is_raised_to_power() {
        let a = arr2(&[[4.0f64]]);
        let result = matrix_root_eigen(&a, 2, 0.0, true, true).unwrap();
        assert_eq!(result.root.shape(), &[1, 1]);
        assert!((result.root[[0, 0]] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn one_by_one_matrix_is_regularized() {
        let a = arr2(&[[0.0f64]]);
        let result = matrix_root_eigen(&a, 2, 1e-4, true, true).unwrap();
        assert!((result.root[[0, 0]] - 100.0).abs() < 1e-8);

        let a = arr2(&[[-1e-12f64]]);
        let result = matrix_root_eigen(&a, 2, 1e-4, true, true).unwrap();
        assert_no_nans(&result.root);
        assert!((result.root[[0, 0]] - 100.0).abs() < 1e-8);
    }

    #[test]
    fn zero_dimensional_matrix_is_raised_directly() {
        let a = arr0(9.0f64);
        let result = matrix_root_eigen(&a, 2, 0.0, false, true).unwrap();
        assert!((result.root[()] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn nonpositive_roots_are_rejected() {
        let a = random_psd_matrix(3);
        for root in [0, -1].iter() {
            match matrix_root_eigen(&a, *root, 0.0, true, true) {
                Err(RootInvError::InvalidRoot { root : bad }) => assert_eq!(bad, *root),
                other => panic!("Expected InvalidRoot, got {:?}", other.map(|r| r.root))
            }
        }
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let a = Array2::<f64>::ones((2, 3));
        assert!(matches!(matrix_root_eigen(&a, 2, 0.0, true, true),
                         Err(RootInvError::Shape { .. })));
    }

    #[test]
    fn three_dimensional_array_is_rejected() {
        let a = Array3::<f64>::ones((2, 2, 2));
        assert!(matches!(matrix_root_eigen(&a, 2, 0.0, true, true),
                         Err(RootInvError::Shape { .. })));
    }

    #[test]
    fn slightly_negative_eigenvalue_is_corrected() {
        let eigenvalues = arr1(&[-1e-9f64, 1.0, 2.0, 5.0]);
        let a = random_matrix_with_eigenvalues(&eigenvalues);
        let epsilon = 1e-4;
        let result = matrix_root_eigen(&a, 2, epsilon, true, true).unwrap();
        assert_no_nans(&result.root);
        assert!(result.eigenvalues.iter().all(|lambda| *lambda >= epsilon - 1e-12));
        assert!((result.eigenvalues[0] - epsilon).abs() < 1e-12);
    }

    #[test]
    fn uncorrected_spectrum_reconstructs_matrix() {
        let a = random_psd_matrix(5);
        let result = matrix_root_eigen(&a, 1, 0.0, false, false).unwrap();
        for i in 1..5 {
            assert!(result.eigenvalues[i - 1] <= result.eigenvalues[i]);
        }
        let q = &result.eigenvectors;
        let reconstructed = scale_columns(q.view(), result.eigenvalues.view()).dot(&q.t());
        assert_equal_matrices_to_within(&reconstructed, &a, 1e-8);
        assert_equal_matrices_to_within(&result.root, &a, 1e-8);
    }

    #[test]
    fn forward_root_raised_to_root_recovers_matrix() {
        let a = random_psd_matrix(5);
        let result = matrix_root_eigen(&a, 3, 0.0, false, true).unwrap();
        let cubed = matrix_power(result.root.view(), 3);
        assert_equal_matrices_to_within(&cubed, &a, 1e-8);
    }

    #[test]
    fn inverse_root_round_trips() {
        let a = random_psd_matrix(6);
        let result = matrix_root_eigen(&a, 4, 0.0, true, true).unwrap();
        let recovered = matrix_power(result.root.view(), 4).inv().unwrap();
        assert_equal_matrices_to_within(&recovered, &a, 1e-7);
    }

    #[test]
    fn epsilon_regularizes_the_spectrum() {
        let a = Array2::<f64>::eye(3) * 3.0;
        let result = matrix_root_eigen(&a, 1, 1.0, true, true).unwrap();
        assert_equal_matrices(&result.root, &(Array2::<f64>::eye(3) * 0.25));
    }

    #[test]
    fn single_precision_matrices_are_supported() {
        let a = arr2(&[[4.0f32, 0.0], [0.0, 16.0]]);
        let result = matrix_root_eigen(&a, 2, 0.0, true, true).unwrap();
        assert!((result.root[[0, 0]] - 0.5).abs() < 1e-5);
        assert!((result.root[[1, 1]] - 0.25).abs() < 1e-5);
        assert!(result.root[[0, 1]].abs() < 1e-5);
    }
}

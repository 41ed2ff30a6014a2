extern crate ndarray;
extern crate pretty_env_logger;
#[macro_use] extern crate log;

use ndarray::*;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::StandardNormal;

use matrix_root_inv::params::*;
use matrix_root_inv::*;

fn random_spd_matrix(dim : usize) -> Array2<f64> {
    let sqrt : Array2<f64> = Array::random((dim, dim), StandardNormal);
    let mut result = sqrt.t().dot(&sqrt);
    result /= dim as f64;
    result
}

///Runs both root inverse methods over random SPD matrices and reports how far each
///result is from a double-precision eigendecomposition reference.
fn main() -> Result<()> {
    pretty_env_logger::init();

    let methods = [RootInvMethod::Eigen, RootInvMethod::Newton];

    for dim in AUDIT_DIMS.iter() {
        let a = random_spd_matrix(*dim);
        let a_single = a.mapv(|elem| elem as f32);
        for root in AUDIT_ROOTS.iter() {
            for method in methods.iter() {
                let config = RootInvConfig {
                    epsilon : AUDIT_EPSILON,
                    method : *method,
                    ..RootInvConfig::default()
                };
                let mut a_copy = a_single.clone();
                let x_hat = compute_inverse_root(&mut a_copy, *root, &config)?;
                let residuals = compute_matrix_root_inverse_residuals(&a_single, &x_hat,
                                                                      *root, AUDIT_EPSILON)?;
                info!("dim {} root {} {}: relative error {:e}, relative residual {:e}",
                      dim, root, method, residuals.relative_error, residuals.relative_residual);
            }
        }
    }
    Ok(())
}

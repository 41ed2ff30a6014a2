extern crate ndarray;
extern crate ndarray_linalg;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use ndarray::*;
use serde::{Serialize, Deserialize};
use crate::error::{Result, RootInvError};
use crate::params::*;
use crate::root_scalar::*;
use crate::matrix_root_eigen::*;
use crate::matrix_inverse_root_newton::*;

///Algorithm used to compute a matrix inverse root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RootInvMethod {
    ///Symmetric eigendecomposition, see [`matrix_root_eigen`]
    Eigen,
    ///Coupled inverse Newton iteration, see [`matrix_inverse_root_newton`]
    Newton
}

impl Default for RootInvMethod {
    fn default() -> Self {
        RootInvMethod::Eigen
    }
}

impl fmt::Display for RootInvMethod {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootInvMethod::Eigen => write!(f, "eigen"),
            RootInvMethod::Newton => write!(f, "newton")
        }
    }
}

impl FromStr for RootInvMethod {
    type Err = RootInvError;

    fn from_str(s : &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "eigen" => Ok(RootInvMethod::Eigen),
            "newton" => Ok(RootInvMethod::Newton),
            _ => Err(RootInvError::UnsupportedMethod { method : s.to_string() })
        }
    }
}

impl TryFrom<String> for RootInvMethod {
    type Error = RootInvError;

    fn try_from(s : String) -> Result<Self> {
        s.parse()
    }
}

impl From<RootInvMethod> for String {
    fn from(method : RootInvMethod) -> String {
        method.to_string()
    }
}

///Numeric selectors, as used by callers which store the method as an integer code.
impl TryFrom<i32> for RootInvMethod {
    type Error = RootInvError;

    fn try_from(code : i32) -> Result<Self> {
        match code {
            0 => Ok(RootInvMethod::Eigen),
            1 => Ok(RootInvMethod::Newton),
            _ => Err(RootInvError::UnsupportedMethod { method : code.to_string() })
        }
    }
}

///Caller-supplied settings for [`compute_inverse_root`]. `max_iterations` and
///`tolerance` only affect [`RootInvMethod::Newton`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootInvConfig {
    ///Added along the diagonal before taking the root
    pub epsilon : f64,
    pub method : RootInvMethod,
    pub max_iterations : usize,
    pub tolerance : f64
}

impl Default for RootInvConfig {
    fn default() -> Self {
        RootInvConfig {
            epsilon : DEFAULT_EPSILON,
            method : RootInvMethod::default(),
            max_iterations : DEFAULT_MAX_ITERATIONS,
            tolerance : DEFAULT_TOLERANCE
        }
    }
}

impl RootInvConfig {
    pub fn with_method(method : RootInvMethod) -> RootInvConfig {
        RootInvConfig {
            method,
            ..RootInvConfig::default()
        }
    }
}

///Computes the inverse `root`-th root of the symmetric matrix `a`, `(a + epsilon I)^{-1/root}`,
///with the method named in `config`.
///
///With [`RootInvMethod::Newton`], `a` is regularized in place (see
///[`matrix_inverse_root_newton`]), and running out of iterations only logs a
///warning; the best available estimate is still returned. Use
///[`compute_inverse_root_with_observer`] to handle that case differently.
pub fn compute_inverse_root<T, S, D>(a : &mut ArrayBase<S, D>, root : i32,
                                     config : &RootInvConfig) -> Result<Array<T, D>>
    where T : RootScalar, S : DataMut<Elem = T>, D : Dimension {
    compute_inverse_root_with_observer(a, root, config, |newton_root : &NewtonRoot<T>| {
        warn!("Newton did not converge and reached maximum number of iterations! \
               ({} iterations, error {})", newton_root.iterations, newton_root.error);
    })
}

///As [`compute_inverse_root`], but a Newton run which stops at `max_iterations`
///without reaching `tolerance` is reported to `on_max_iterations` instead of the log.
pub fn compute_inverse_root_with_observer<T, S, D, F>(a : &mut ArrayBase<S, D>, root : i32,
                                                      config : &RootInvConfig,
                                                      mut on_max_iterations : F)
                                                      -> Result<Array<T, D>>
    where T : RootScalar, S : DataMut<Elem = T>, D : Dimension, F : FnMut(&NewtonRoot<T>) {

    if (root <= 0) {
        return Err(RootInvError::InvalidRoot { root });
    }
    let epsilon = T::narrow(config.epsilon);

    match config.method {
        RootInvMethod::Eigen => {
            let eigen_root = matrix_root_eigen(&*a, root, epsilon, true, true)?;
            Ok(eigen_root.root)
        },
        RootInvMethod::Newton => {
            let mut square = a.view_mut().into_dimensionality::<Ix2>()?;
            let newton_root = matrix_inverse_root_newton(&mut square, root, epsilon,
                                                         config.max_iterations,
                                                         T::narrow(config.tolerance))?;
            if (!newton_root.converged()) {
                on_max_iterations(&newton_root);
            }
            Ok(newton_root.root.into_dimensionality::<D>()?)
        }
    }
}

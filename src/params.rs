//Regularization added along the diagonal before root extraction
pub const DEFAULT_EPSILON : f64 = 0.0;

//Bounds for the coupled Newton iteration
pub const DEFAULT_MAX_ITERATIONS : usize = 1000;
pub const DEFAULT_TOLERANCE : f64 = 1e-6;

//Frobenius-norm threshold under which test matrices compare equal
pub const ZEROING_THRESH : f64 = 0.0001;

//Audit driver settings
pub const AUDIT_DIMS : [usize; 4] = [1, 4, 16, 64];
pub const AUDIT_ROOTS : [i32; 3] = [1, 2, 4];
pub const AUDIT_EPSILON : f64 = 1e-6;

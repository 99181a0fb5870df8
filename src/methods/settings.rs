//! Settings for numerical integrators

use bon::Builder;

use crate::Float;

#[derive(Builder, Clone, Debug)]
/// Settings for the numerical integrators
pub struct Settings {
    /// Tolerance on successive corrector iterates of the Adams method.
    #[builder(default = 1e-6)]
    pub corrector_tol: Float,
    /// Max number of fixed-point iterations of the Adams corrector per step.
    #[builder(default = 100)]
    pub corrector_maxiter: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}

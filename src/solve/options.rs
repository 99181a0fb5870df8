//! Options for solve_ode

use bon::Builder;

use crate::{Float, core::exact::Exact, methods::Method};

#[derive(Builder, Clone, Copy)]
/// Options for [`solve_ode`](crate::solve_ode)
///
/// # Example
///
/// ```
/// use odegrid::prelude::*;
///
/// let exact = |x: Float, x0: Float, y0: Float| y0 * (x - x0).exp();
/// let options = Options::builder()
///     .method(Method::Adams)
///     .n(4)
///     .eps(1e-5)
///     .exact(&exact)
///     .build();
/// assert_eq!(options.max_iterations, 20);
/// ```
pub struct Options<'a> {
    /// Method to use. Default: RK4.
    #[builder(default = Method::RK4)]
    pub method: Method,
    /// Number of subintervals of the first grid. Default: 10.
    #[builder(default = 10)]
    pub n: usize,
    /// Accuracy target of the refinement loop, also used as the Adams
    /// corrector tolerance. Default: 1e-6.
    #[builder(default = 1e-6)]
    pub eps: Float,
    /// Closed-form solution. Measures the Adams error and fills
    /// [`OdeSolution::y_exact`](crate::OdeSolution::y_exact).
    pub exact: Option<&'a dyn Exact>,
    /// Ceiling on grid doublings before giving up. Default: 20.
    #[builder(default = 20)]
    pub max_iterations: usize,
    /// Max number of fixed-point iterations of the Adams corrector per step.
    /// Default: 100.
    #[builder(default = 100)]
    pub corrector_maxiter: usize,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self::builder().build()
    }
}

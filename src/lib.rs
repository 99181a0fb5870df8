//! Adaptive step-doubling solvers for scalar initial value problems (IVPs) of
//! ordinary differential equations (ODEs) `y' = f(x, y)`, `y(x0) = y0`.
//!
//! Three integrators are provided: Improved Euler (Heun, order 2), the classical
//! Runge-Kutta method (order 4) and the fourth order Adams-Bashforth-Moulton
//! predictor-corrector. The [`solve_ode`] driver reruns the chosen integrator on
//! uniform grids of doubling density until its error estimate meets the tolerance.

pub mod core;
pub mod equation;
pub mod error;
pub mod methods;
pub mod prelude;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use error::Error;
pub use solve::{ErrorRule, OdeSolution, Options, solve_all, solve_ode};

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f128, f64, f32 as desired.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;

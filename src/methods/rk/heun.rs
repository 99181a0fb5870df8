//! Improved Euler (Heun) fixed-step integrator.

use crate::{
    Float,
    core::{grid::Grid, ode::ODE},
    methods::result::IntegrationResult,
};

/// Improved Euler method of order 2 over every node of `grid`.
///
/// An explicit Euler predictor gives the slope at the step end; the step then
/// uses the mean of both slopes. Two evaluations of `f` per step, no iteration.
pub fn heun<F>(f: &F, grid: &Grid, y0: Float) -> IntegrationResult
where
    F: ODE,
{
    let x = grid.nodes();
    let h = grid.h();

    let mut y = Vec::with_capacity(x.len());
    y.push(y0);

    for i in 0..x.len() - 1 {
        let slope = f.ode(x[i], y[i]);
        let slope_end = f.ode(x[i] + h, y[i] + h * slope);
        y.push(y[i] + 0.5 * h * (slope + slope_end));
    }

    let nfev = 2 * (x.len() - 1);
    IntegrationResult::new(y, nfev, 0)
}

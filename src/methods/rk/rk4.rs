//! Classic explicit Runge-Kutta 4 (RK4) fixed-step integrator.

use crate::{
    Float,
    core::{grid::Grid, ode::ODE},
    methods::result::IntegrationResult,
};

/// Classical explicit Runge-Kutta 4 (RK4) over every node of `grid`.
///
/// The trajectory starts at exactly `y0`; each further value costs four
/// evaluations of `f`.
pub fn rk4<F>(f: &F, grid: &Grid, y0: Float) -> IntegrationResult
where
    F: ODE,
{
    let x = grid.nodes();
    let h = grid.h();

    let mut y = Vec::with_capacity(x.len());
    y.push(y0);

    for i in 0..x.len() - 1 {
        y.push(rk4_step(f, x[i], y[i], h));
    }

    let nfev = 4 * (x.len() - 1);
    IntegrationResult::new(y, nfev, 0)
}

/// Advance one RK4 step of size `h` from `(x, y)`.
pub fn rk4_step<F>(f: &F, x: Float, y: Float, h: Float) -> Float
where
    F: ODE,
{
    // Stage computations
    let k1 = h * f.ode(x, y);
    let k2 = h * f.ode(x + C2 * h, y + A21 * k1);
    let k3 = h * f.ode(x + C3 * h, y + A32 * k2);
    let k4 = h * f.ode(x + C4 * h, y + A43 * k3);

    y + B1 * k1 + B2 * k2 + B3 * k3 + B4 * k4
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;

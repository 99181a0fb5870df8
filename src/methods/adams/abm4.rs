//! Fourth order Adams-Bashforth-Moulton predictor-corrector.

use log::warn;

use crate::{
    Float,
    core::{grid::Grid, ode::ODE},
    methods::{result::IntegrationResult, rk::rk4_step, settings::Settings},
};

/// Number of leading trajectory values supplied by RK4.
pub const BOOTSTRAP_POINTS: usize = 4;

/// Adams-Bashforth-Moulton method of order 4 over every node of `grid`.
///
/// The first [`BOOTSTRAP_POINTS`] values come from RK4 on the same grid, so a
/// grid with fewer nodes yields the plain RK4 trajectory. Every later value is
/// predicted with the explicit four-step Adams-Bashforth formula and refined
/// by fixed-point iteration on the implicit Adams-Moulton formula until two
/// iterates differ by less than `settings.corrector_tol`. A step whose
/// corrector does not settle within `settings.corrector_maxiter` iterations
/// keeps its last iterate and is counted in [`IntegrationResult::stalls`].
pub fn abm4<F>(f: &F, grid: &Grid, y0: Float, settings: &Settings) -> IntegrationResult
where
    F: ODE,
{
    let x = grid.nodes();
    let h = grid.h();
    let npts = x.len();

    let mut y = Vec::with_capacity(npts);
    let mut dy = Vec::with_capacity(npts);
    let mut nfev = 0;
    let mut stalls = 0;

    // --- Bootstrap with RK4 ---
    y.push(y0);
    for i in 0..npts.min(BOOTSTRAP_POINTS) - 1 {
        y.push(rk4_step(f, x[i], y[i], h));
        nfev += 4;
    }
    if npts <= BOOTSTRAP_POINTS {
        return IntegrationResult::new(y, nfev, stalls);
    }

    for i in 0..BOOTSTRAP_POINTS {
        dy.push(f.ode(x[i], y[i]));
    }
    nfev += BOOTSTRAP_POINTS;

    // --- Main multi-step loop ---
    for i in BOOTSTRAP_POINTS - 1..npts - 1 {
        // Predictor (Adams-Bashforth)
        let yp = y[i]
            + h / 24.0 * (P0 * dy[i] + P1 * dy[i - 1] + P2 * dy[i - 2] + P3 * dy[i - 3]);

        // Corrector (Adams-Moulton) as fixed-point iteration seeded with the predictor
        let history = C1 * dy[i] + C2 * dy[i - 1] + C3 * dy[i - 2];
        let mut ycur = yp;
        let mut converged = false;
        for _ in 0..settings.corrector_maxiter {
            let ynext = y[i] + h / 24.0 * (C0 * f.ode(x[i + 1], ycur) + history);
            nfev += 1;
            let delta = (ynext - ycur).abs();
            ycur = ynext;
            if delta < settings.corrector_tol {
                converged = true;
                break;
            }
        }

        if !converged {
            stalls += 1;
            warn!(
                "Adams corrector did not settle within {} iterations at x = {}",
                settings.corrector_maxiter,
                x[i + 1]
            );
        }

        y.push(ycur);
        dy.push(f.ode(x[i + 1], ycur));
        nfev += 1;
    }

    IntegrationResult::new(y, nfev, stalls)
}

// Adams-Bashforth predictor weights (times 24)
const P0: Float = 55.0;
const P1: Float = -59.0;
const P2: Float = 37.0;
const P3: Float = -9.0;

// Adams-Moulton corrector weights (times 24)
const C0: Float = 9.0;
const C1: Float = 19.0;
const C2: Float = -5.0;
const C3: Float = 1.0;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::methods::rk::rk4;
    use approx::assert_abs_diff_eq;

    fn settings(tol: Float) -> Settings {
        Settings::builder().corrector_tol(tol).build()
    }

    #[test]
    fn bootstrap_matches_rk4() {
        let f = |x: Float, y: Float| x + y;
        let grid = Grid::uniform(0.0, 1.0, 10);
        let adams = abm4(&f, &grid, 1.0, &settings(1e-8));
        let rk = rk4(&f, &grid, 1.0);
        assert_eq!(&adams.y[..BOOTSTRAP_POINTS], &rk.y[..BOOTSTRAP_POINTS]);
        assert_eq!(adams.y.len(), grid.len());
        assert_eq!(adams.stalls, 0);
    }

    #[test]
    fn short_grid_is_plain_rk4() {
        let f = |x: Float, y: Float| x.sin() - y;
        for n in 1..=3 {
            let grid = Grid::uniform(0.0, 1.0, n);
            let adams = abm4(&f, &grid, 0.5, &settings(1e-8));
            let rk = rk4(&f, &grid, 0.5);
            assert_eq!(adams.y, rk.y);
            assert_eq!(adams.nfev, rk.nfev);
        }
    }

    #[test]
    fn tracks_exponential() {
        let f = |_x: Float, y: Float| y;
        let grid = Grid::uniform(0.0, 1.0, 100);
        let result = abm4(&f, &grid, 1.0, &settings(1e-12));
        for (xi, yi) in grid.nodes().iter().zip(&result.y) {
            assert_abs_diff_eq!(*yi, xi.exp(), epsilon = 1e-7);
        }
    }

    #[test]
    fn stalled_corrector_is_counted_not_looped() {
        // Non-finite slopes never let the corrector settle
        let f = |_x: Float, y: Float| y / 0.0;
        let grid = Grid::uniform(0.0, 1.0, 8);
        let capped = Settings::builder().corrector_maxiter(5).build();
        let result = abm4(&f, &grid, 1.0, &capped);
        assert_eq!(result.y.len(), grid.len());
        assert_eq!(result.stalls, grid.len() - BOOTSTRAP_POINTS);
    }
}

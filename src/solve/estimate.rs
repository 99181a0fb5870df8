//! Error estimates comparing successive refinements.

use crate::{Float, core::exact::Exact, core::grid::Grid, methods::Method};

/// Which estimate produced [`OdeSolution::error`](crate::OdeSolution::error).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRule {
    /// Runge extrapolation of the value at `xn` for a method of the given order:
    /// `|y_h/2(xn) - y_h(xn)| / (2^p - 1)`.
    Runge { order: i32 },
    /// Largest deviation from the closed-form solution over the grid.
    ExactDeviation,
    /// Largest deviation from the previous refinement over the shared nodes,
    /// scaled like a fourth order Runge estimate.
    PreviousGrid,
}

/// Error estimator chosen once per solve from the method and the available data.
pub(crate) enum Estimator<'a> {
    Runge(i32),
    Exact(&'a dyn Exact),
    PreviousGrid,
}

impl<'a> Estimator<'a> {
    pub(crate) fn select(method: Method, exact: Option<&'a dyn Exact>) -> Self {
        match (method.runge_order(), exact) {
            (Some(order), _) => Estimator::Runge(order),
            (None, Some(exact)) => Estimator::Exact(exact),
            (None, None) => Estimator::PreviousGrid,
        }
    }

    pub(crate) fn rule(&self) -> ErrorRule {
        match self {
            Estimator::Runge(order) => ErrorRule::Runge { order: *order },
            Estimator::Exact(_) => ErrorRule::ExactDeviation,
            Estimator::PreviousGrid => ErrorRule::PreviousGrid,
        }
    }

    /// Estimate the error of `fine`, computed on `grid`, given the trajectory
    /// `coarse` of the previous refinement on the grid with half as many
    /// subintervals.
    pub(crate) fn estimate(
        &self,
        coarse: &[Float],
        fine: &[Float],
        grid: &Grid,
        y0: Float,
    ) -> Float {
        match self {
            Estimator::Runge(order) => runge(coarse, fine, *order),
            Estimator::Exact(exact) => exact_deviation(*exact, grid, fine, y0),
            Estimator::PreviousGrid => previous_grid_deviation(coarse, fine),
        }
    }
}

/// Runge extrapolation on the last value of two trajectories whose step sizes
/// differ by a factor of two.
pub fn runge(coarse: &[Float], fine: &[Float], order: i32) -> Float {
    match (coarse.last(), fine.last()) {
        (Some(yc), Some(yf)) => (yf - yc).abs() / ((2.0 as Float).powi(order) - 1.0),
        _ => Float::NAN,
    }
}

/// `max_i |exact(x_i) - y_i|` over every node of `grid`.
pub fn exact_deviation(exact: &dyn Exact, grid: &Grid, y: &[Float], y0: Float) -> Float {
    let x0 = grid[0];
    max_abs(
        grid.nodes()
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| exact.exact(xi, x0, y0) - yi),
    )
}

/// `max_i |fine_2i - coarse_i| / 15` over the nodes shared by both grids.
pub fn previous_grid_deviation(coarse: &[Float], fine: &[Float]) -> Float {
    let diff = max_abs(
        coarse
            .iter()
            .zip(fine.iter().step_by(2))
            .map(|(yc, yf)| yf - yc),
    );
    diff / ((2.0 as Float).powi(4) - 1.0)
}

/// Largest magnitude; a NaN anywhere makes the result NaN.
fn max_abs<I: Iterator<Item = Float>>(values: I) -> Float {
    values.fold(0.0, |acc: Float, v| {
        let v = v.abs();
        if v > acc || v.is_nan() { v } else { acc }
    })
}

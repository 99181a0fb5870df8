//! Rich solution type for solve_ode: final grid, trajectory and run diagnostics.

use crate::{Float, core::status::Status, methods::Method};

use super::estimate::ErrorRule;

/// Rich solution of solve_ode: the finest trajectory computed plus diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct OdeSolution {
    /// Method that produced the trajectory
    pub method: Method,
    /// Nodes of the final grid, `x0` through `xn`
    pub x: Vec<Float>,
    /// Approximate solution at every node of `x`, `y[0] == y0`
    pub y: Vec<Float>,
    /// Closed-form solution at every node of `x`, if one was supplied
    pub y_exact: Option<Vec<Float>>,
    /// Number of subintervals of the final grid
    pub n: usize,
    /// Step size of the final grid
    pub h: Float,
    /// Number of grid doublings performed
    pub iterations: usize,
    /// Final error estimate, `INFINITY` if no refinement took place
    pub error: Float,
    /// Estimate that produced `error`
    pub error_rule: ErrorRule,
    /// Function evaluations spent on the final grid
    pub nfev: usize,
    /// Steps of the final trajectory whose Adams corrector hit its cap
    pub corrector_stalls: usize,
    pub status: Status,
}

impl OdeSolution {
    /// True when the error estimate met the tolerance.
    pub fn converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// The node `xn` and the approximation there.
    pub fn last(&self) -> Option<(Float, Float)> {
        Some((*self.x.last()?, *self.y.last()?))
    }

    /// Iterate over stored pairs (x_i, y_i).
    pub fn iter(&self) -> SolutionIter<'_> {
        SolutionIter {
            x_iter: self.x.iter(),
            y_iter: self.y.iter(),
        }
    }
}

/// Iterator over (x, y) pairs of an OdeSolution.
pub struct SolutionIter<'a> {
    x_iter: std::slice::Iter<'a, Float>,
    y_iter: std::slice::Iter<'a, Float>,
}

impl Iterator for SolutionIter<'_> {
    type Item = (Float, Float);

    fn next(&mut self) -> Option<Self::Item> {
        match (self.x_iter.next(), self.y_iter.next()) {
            (Some(&x), Some(&y)) => Some((x, y)),
            _ => None,
        }
    }
}

impl<'a> IntoIterator for &'a OdeSolution {
    type Item = (Float, Float);
    type IntoIter = SolutionIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

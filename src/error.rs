//! Errors for the adaptive driver

use thiserror::Error;

use crate::Float;

/// Validation errors returned by [`crate::solve_ode`] before any integration starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("interval end xn must be greater than x0 (got x0 = {x0}, xn = {xn})")]
    InvalidInterval { x0: Float, xn: Float },
    #[error("initial value y0 must be finite (got {0})")]
    NonFiniteInitialValue(Float),
    #[error("initial number of subintervals n must be greater than 1 (got {0})")]
    TooFewSubintervals(usize),
    #[error("tolerance eps must be positive and finite (got {0})")]
    InvalidTolerance(Float),
    #[error("max_iterations must be positive (got {0})")]
    MaxIterationsMustBePositive(usize),
    #[error("corrector_maxiter must be positive (got {0})")]
    CorrectorMaxIterMustBePositive(usize),
}

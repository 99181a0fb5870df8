//! Closed-form solutions used for error measurement and reporting.

use crate::Float;

/// Closed-form solution `y(x)` of an initial value problem with `y(x0) = y0`.
///
/// Only used to measure the error of methods without a Runge estimate and to
/// report exact values on the final grid. It never feeds back into an
/// integrator.
pub trait Exact {
    fn exact(&self, x: Float, x0: Float, y0: Float) -> Float;
}

impl<F> Exact for F
where
    F: Fn(Float, Float, Float) -> Float,
{
    fn exact(&self, x: Float, x0: Float, y0: Float) -> Float {
        self(x, x0, y0)
    }
}

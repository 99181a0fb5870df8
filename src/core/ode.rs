//! User-supplied right-hand side.

use crate::Float;

/// User-supplied ODE right-hand side.
///
/// Implement this trait for your problem to provide the function
/// y' = f(x, y). The integrators call `ode` at arbitrary `(x, y)` pairs,
/// possibly many times per solve, and expect the derivative back. It must be
/// free of side effects: the driver relies on repeated solves giving
/// identical trajectories.
///
/// Closures `Fn(Float, Float) -> Float` implement the trait directly.
///
/// # Example
///
/// ```
/// use odegrid::prelude::*;
///
/// struct Decay { k: Float }
/// impl ODE for Decay {
///     fn ode(&self, _x: Float, y: Float) -> Float {
///         -self.k * y
///     }
/// }
/// assert_eq!(Decay { k: 2.0 }.ode(0.0, 1.0), -2.0);
/// ```
pub trait ODE {
    fn ode(&self, x: Float, y: Float) -> Float;
}

impl<F> ODE for F
where
    F: Fn(Float, Float) -> Float,
{
    fn ode(&self, x: Float, y: Float) -> Float {
        self(x, y)
    }
}

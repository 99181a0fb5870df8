//! Catalogue of predefined equations with closed-form solutions.

use crate::Float;

/// Right-hand side `f(x, y)` as a plain function value.
pub type RhsFn = fn(Float, Float) -> Float;

/// Closed-form solution `y(x; x0, y0)` as a plain function value.
pub type ExactFn = fn(Float, Float, Float) -> Float;

/// Predefined initial value problems.
///
/// Resolve a variant once (for instance from a menu choice with
/// [`TryFrom<usize>`]) and hand its [`rhs`](Equation::rhs) and
/// [`exact`](Equation::exact) to [`solve_ode`](crate::solve_ode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Equation {
    /// `y' = y + (1 + x) y^2`, singular where `x e^x = (x0 e^x0 y0 + e^x0) / y0`
    Riccati,
    /// `y' = x + y`
    Linear,
    /// `y' = sin x - y`
    Sine,
    /// `y' = y / x`, undefined at `x = 0`
    Ratio,
    /// `y' = e^x`
    Exponential,
}

impl Equation {
    /// Every equation, in menu order.
    pub const ALL: [Equation; 5] = [
        Equation::Riccati,
        Equation::Linear,
        Equation::Sine,
        Equation::Ratio,
        Equation::Exponential,
    ];

    pub fn rhs(&self) -> RhsFn {
        match self {
            Equation::Riccati => |x: Float, y: Float| y + (1.0 + x) * y * y,
            Equation::Linear => |x: Float, y: Float| x + y,
            Equation::Sine => |x: Float, y: Float| x.sin() - y,
            Equation::Ratio => |x: Float, y: Float| y / x,
            Equation::Exponential => |x: Float, _y: Float| x.exp(),
        }
    }

    /// Closed-form solution through `(x0, y0)`.
    pub fn exact(&self) -> ExactFn {
        match self {
            Equation::Riccati => |x: Float, x0: Float, y0: Float| {
                let ex = x.exp();
                let ex0 = x0.exp();
                -ex / (x * ex - (x0 * ex0 * y0 + ex0) / y0)
            },
            Equation::Linear => |x: Float, x0: Float, y0: Float| {
                (x - x0).exp() * (y0 + x0 + 1.0) - x - 1.0
            },
            Equation::Sine => |x: Float, x0: Float, y0: Float| {
                let ex0 = x0.exp();
                let c = 2.0 * ex0 * y0 - ex0 * x0.sin() + ex0 * x0.cos();
                c / (2.0 * x.exp()) + x.sin() / 2.0 - x.cos() / 2.0
            },
            Equation::Ratio => |x: Float, x0: Float, y0: Float| x * y0 / x0,
            Equation::Exponential => |x: Float, x0: Float, y0: Float| y0 - x0.exp() + x.exp(),
        }
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Equation::Riccati => write!(f, "y + (1 + x)*y^2"),
            Equation::Linear => write!(f, "x + y"),
            Equation::Sine => write!(f, "sin(x) - y"),
            Equation::Ratio => write!(f, "y / x"),
            Equation::Exponential => write!(f, "e^x"),
        }
    }
}

/// 1-based menu choice.
impl TryFrom<usize> for Equation {
    type Error = usize;

    fn try_from(choice: usize) -> Result<Self, Self::Error> {
        choice
            .checked_sub(1)
            .and_then(|i| Equation::ALL.get(i).copied())
            .ok_or(choice)
    }
}

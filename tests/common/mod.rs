#![allow(dead_code)]

use odegrid::prelude::*;

/// Route `log` records through the test harness; `RUST_LOG=debug` shows refinements.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// y' = y
pub fn growth(_x: Float, y: Float) -> Float {
    y
}

pub fn growth_exact(x: Float, x0: Float, y0: Float) -> Float {
    y0 * (x - x0).exp()
}

/// y' = x + y
pub fn linear(x: Float, y: Float) -> Float {
    x + y
}

pub fn linear_exact(x: Float, x0: Float, y0: Float) -> Float {
    (x - x0).exp() * (y0 + x0 + 1.0) - x - 1.0
}

/// Interval and initial value on which each catalogue equation is smooth.
pub fn smooth_setup(eq: Equation) -> (Float, Float, Float) {
    match eq {
        Equation::Riccati => (0.0, 1.0, -1.0),
        Equation::Ratio => (1.0, 2.0, 1.0),
        Equation::Linear | Equation::Sine | Equation::Exponential => (0.0, 1.0, 1.0),
    }
}

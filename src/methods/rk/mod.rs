//! Explicit single-step Runge-Kutta integrators (Heun, RK4)

mod heun;
mod rk4;

pub use heun::heun;
pub use rk4::{rk4, rk4_step};

//! Numerical methods

pub mod adams;
pub mod result;
pub mod rk;
pub mod settings;

use crate::{
    Float,
    core::{grid::Grid, ode::ODE},
};

use result::IntegrationResult;
use settings::Settings;

/// Integration method selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// Improved Euler (Heun) single-step method of order 2
    ImprovedEuler,
    /// Classic four-stage Runge-Kutta method of order 4
    RK4,
    /// Adams-Bashforth-Moulton predictor-corrector of order 4, started by RK4
    Adams,
}

impl Method {
    /// Every method, in the order the catalogue reports them.
    pub const ALL: [Method; 3] = [Method::ImprovedEuler, Method::RK4, Method::Adams];

    /// Order of accuracy used for Runge extrapolation.
    ///
    /// `None` for methods whose error is not estimated by step doubling.
    pub fn runge_order(&self) -> Option<i32> {
        match self {
            Method::ImprovedEuler => Some(2),
            Method::RK4 => Some(4),
            Method::Adams => None,
        }
    }

    /// Whether the method needs starting values from a self-starting method.
    pub fn requires_bootstrap(&self) -> bool {
        matches!(self, Method::Adams)
    }

    /// Run the method over `grid` starting from `y0`.
    pub fn integrate<F>(
        &self,
        f: &F,
        grid: &Grid,
        y0: Float,
        settings: &Settings,
    ) -> IntegrationResult
    where
        F: ODE,
    {
        match self {
            Method::ImprovedEuler => rk::heun(f, grid, y0),
            Method::RK4 => rk::rk4(f, grid, y0),
            Method::Adams => adams::abm4(f, grid, y0, settings),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::ImprovedEuler => write!(f, "Improved Euler"),
            Method::RK4 => write!(f, "Runge-Kutta 4"),
            Method::Adams => write!(f, "Adams"),
        }
    }
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "euler" | "heun" | "improved_euler" | "improvedeuler" => Method::ImprovedEuler,
            "adams" | "abm" | "abm4" => Method::Adams,
            _ => Method::RK4,
        }
    }
}
